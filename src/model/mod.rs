//! Catalog data model
//!
//! Songs are owned by the catalog and shared with the album that groups
//! them. Albums are linked under artists by id.

mod album;
mod artist;
mod catalog;
mod song;

pub use album::{Album, AlbumId};
pub use artist::Artist;
pub use catalog::{AlbumListing, ArtistListing, Catalog};
pub use song::Song;
