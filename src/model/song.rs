use serde::{Deserialize, Serialize};
use std::fmt;

/// A single song and its metadata
///
/// Songs are immutable once created. The catalog shares one instance between
/// its song list and the owning album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album title
    pub album: String,

    /// Genre
    pub genre: String,

    /// Duration as free-form text, usually "M:SS" (not validated)
    pub duration: String,
}

impl Song {
    /// Create a new song from its five fields
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        genre: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            genre: genre.into(),
            duration: duration.into(),
        }
    }

    /// Case-insensitive key used for searching and sorting
    pub fn title_key(&self) -> String {
        self.title.to_lowercase()
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.artist, self.album)
    }
}
