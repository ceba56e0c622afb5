use super::Song;
use std::rc::Rc;

/// Position of an album in the catalog's album table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlbumId(pub(crate) usize);

/// Album grouping songs that share an album title
#[derive(Debug, Clone)]
pub struct Album {
    /// Album title (unique within a catalog)
    pub title: String,

    /// Credited artist, fixed by the song that introduced the album
    pub artist: String,

    /// Songs in the order they were added
    songs: Vec<Rc<Song>>,
}

impl Album {
    /// Create a new empty album
    pub fn new(title: String, artist: String) -> Self {
        Self {
            title,
            artist,
            songs: Vec::new(),
        }
    }

    pub(crate) fn add_song(&mut self, song: Rc<Song>) {
        self.songs.push(song);
    }

    /// Songs in insertion order
    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter().map(|song| song.as_ref())
    }

    /// Song titles in insertion order
    pub fn song_titles(&self) -> Vec<&str> {
        self.songs.iter().map(|song| song.title.as_str()).collect()
    }

    /// Number of songs on this album
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if album has no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
