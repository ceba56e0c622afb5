use super::AlbumId;

/// Artist with the albums linked to it
#[derive(Debug, Clone)]
pub struct Artist {
    /// Artist name (unique within a catalog, exact match)
    pub name: String,

    /// Linked albums in the order they were first linked
    albums: Vec<AlbumId>,
}

impl Artist {
    /// Create a new artist with no albums
    pub fn new(name: String) -> Self {
        Self {
            name,
            albums: Vec::new(),
        }
    }

    /// Link an album unless it is already linked
    ///
    /// Returns true if the album was appended.
    pub(crate) fn link_album(&mut self, album: AlbumId) -> bool {
        if self.albums.contains(&album) {
            return false;
        }
        self.albums.push(album);
        true
    }

    /// Linked album ids in link order
    pub fn album_ids(&self) -> &[AlbumId] {
        &self.albums
    }
}
