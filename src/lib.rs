//! Music Catalog - in-memory catalog of songs, albums and artists
//!
//! This library keeps a list of songs grouped into albums and artists,
//! with case-insensitive search and a stable sort by title.

pub mod console;
pub mod model;
pub mod seed;

pub use console::{Session, SessionConfig};
pub use model::Catalog;
