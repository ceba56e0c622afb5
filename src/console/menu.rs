//! Menu selectors

use std::str::FromStr;
use thiserror::Error;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    ListSongs,
    ListAlbums,
    ListArtists,
    AddSong,
    Search,
    SortByTitle,
}

/// Input that names no menu entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid menu choice: {0:?}")]
pub struct InvalidChoice(pub String);

impl MenuChoice {
    /// All entries in the order they are shown
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ListSongs,
        MenuChoice::ListAlbums,
        MenuChoice::ListArtists,
        MenuChoice::AddSong,
        MenuChoice::Search,
        MenuChoice::SortByTitle,
        MenuChoice::Exit,
    ];

    /// Selector typed to pick this entry
    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "0",
            MenuChoice::ListSongs => "1",
            MenuChoice::ListAlbums => "2",
            MenuChoice::ListArtists => "3",
            MenuChoice::AddSong => "4",
            MenuChoice::Search => "5",
            MenuChoice::SortByTitle => "6",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::ListSongs => "Display all songs",
            MenuChoice::ListAlbums => "Display albums",
            MenuChoice::ListArtists => "Display artists",
            MenuChoice::AddSong => "Add a new song",
            MenuChoice::Search => "Search a song",
            MenuChoice::SortByTitle => "Sort songs by title",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    /// Selectors match exactly; surrounding whitespace is not ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.key() == s)
            .ok_or_else(|| InvalidChoice(s.to_string()))
    }
}
