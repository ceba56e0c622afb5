use super::{Album, AlbumId, Artist, Song};
use std::collections::HashMap;
use std::rc::Rc;

/// Complete music catalog: songs plus album and artist groupings
///
/// Albums and artists are keyed by exact string equality; no case or
/// whitespace normalization is applied.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All songs in catalog order (insertion order until sorted)
    songs: Vec<Rc<Song>>,

    /// Albums in first-seen order
    albums: Vec<Album>,

    /// Album title -> position in `albums`
    album_index: HashMap<String, AlbumId>,

    /// Artists in first-seen order
    artists: Vec<Artist>,

    /// Artist name -> position in `artists`
    artist_index: HashMap<String, usize>,
}

/// An album together with its current song titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumListing<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    pub song_titles: Vec<&'a str>,
}

/// An artist together with the titles of its linked albums
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistListing<'a> {
    pub name: &'a str,
    pub album_titles: Vec<&'a str>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a song, creating its album and artist on first mention
    ///
    /// Never fails. An existing album keeps the artist it was created with,
    /// even when the new song names a different one; the album is still
    /// linked under the new song's artist.
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        genre: impl Into<String>,
        duration: impl Into<String>,
    ) -> &Song {
        let song = Rc::new(Song::new(title, artist, album, genre, duration));

        let album_id = self.album_entry(&song.album, &song.artist);
        self.albums[album_id.0].add_song(Rc::clone(&song));

        let artist_pos = self.artist_entry(&song.artist);
        if self.artists[artist_pos].link_album(album_id) {
            log::debug!("Linked album '{}' to artist '{}'", song.album, song.artist);
        }

        log::debug!("Inserted song: {}", song);
        let position = self.songs.len();
        self.songs.push(song);
        &self.songs[position]
    }

    fn album_entry(&mut self, title: &str, artist: &str) -> AlbumId {
        if let Some(&id) = self.album_index.get(title) {
            let existing = &self.albums[id.0];
            if existing.artist != artist {
                log::debug!(
                    "Album '{}' stays credited to '{}' (song names '{}')",
                    title,
                    existing.artist,
                    artist
                );
            }
            return id;
        }

        log::debug!("Creating album '{}' by '{}'", title, artist);
        let id = AlbumId(self.albums.len());
        self.albums
            .push(Album::new(title.to_string(), artist.to_string()));
        self.album_index.insert(title.to_string(), id);
        id
    }

    fn artist_entry(&mut self, name: &str) -> usize {
        if let Some(&pos) = self.artist_index.get(name) {
            return pos;
        }

        log::debug!("Creating artist '{}'", name);
        let pos = self.artists.len();
        self.artists.push(Artist::new(name.to_string()));
        self.artist_index.insert(name.to_string(), pos);
        pos
    }

    /// All songs in catalog order
    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter().map(|song| song.as_ref())
    }

    /// All albums in first-seen order with their song titles
    pub fn albums(&self) -> impl Iterator<Item = AlbumListing<'_>> {
        self.albums.iter().map(|album| AlbumListing {
            title: &album.title,
            artist: &album.artist,
            song_titles: album.song_titles(),
        })
    }

    /// All artists in first-seen order with their album titles
    pub fn artists(&self) -> impl Iterator<Item = ArtistListing<'_>> {
        self.artists.iter().map(move |artist| ArtistListing {
            name: &artist.name,
            album_titles: self
                .artist_albums(artist)
                .map(|album| album.title.as_str())
                .collect(),
        })
    }

    /// Songs whose title contains `query`, ignoring case
    ///
    /// An empty query matches every song.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Song> + 'a {
        let needle = query.to_lowercase();
        self.songs()
            .filter(move |song| song.title_key().contains(&needle))
    }

    /// Stable sort of the song list by case-insensitive title
    ///
    /// Album and artist groupings are left untouched.
    pub fn sort_by_title(&mut self) {
        self.songs.sort_by_cached_key(|song| song.title_key());
        log::debug!("Sorted {} songs by title", self.songs.len());
    }

    /// Get an album by exact title
    pub fn album(&self, title: &str) -> Option<&Album> {
        self.album_index.get(title).map(|id| &self.albums[id.0])
    }

    /// Get an artist by exact name
    pub fn artist(&self, name: &str) -> Option<&Artist> {
        self.artist_index.get(name).map(|&pos| &self.artists[pos])
    }

    /// Resolve an artist's linked albums
    pub fn artist_albums<'a>(&'a self, artist: &'a Artist) -> impl Iterator<Item = &'a Album> + 'a {
        artist
            .album_ids()
            .iter()
            .filter_map(move |id| self.albums.get(id.0))
    }

    /// Total number of songs
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// Total number of albums
    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    /// Total number of artists
    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    /// Check if the catalog holds no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
