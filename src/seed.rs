//! Fixed songs loaded into the catalog at startup

use crate::model::Catalog;

/// Seed songs as (title, artist, album, genre, duration)
pub const SEED_SONGS: [(&str, &str, &str, &str, &str); 11] = [
    ("Shape of You", "Ed Sheeran", "Divide", "Pop", "3:53"),
    ("Blinding Lights", "The Weeknd", "After Hours", "Synthpop", "3:20"),
    ("Someone Like You", "Adele", "21", "Soul", "4:45"),
    ("Let Her Go", "Passenger", "All the Little Lights", "Folk", "4:12"),
    ("Counting Stars", "OneRepublic", "Native", "Pop Rock", "4:17"),
    ("Senorita", "Shawn Mendes", "SM2", "Pop", "3:10"),
    ("Perfect", "Ed Sheeran", "Divide", "Pop", "4:23"),
    ("Believer", "Imagine Dragons", "Evolve", "Rock", "3:24"),
    ("Rolling in the Deep", "Adele", "21", "Soul", "3:48"),
    ("Closer", "The Chainsmokers", "Collage", "EDM", "4:04"),
    ("Levitating", "Dua Lipa", "Future Nostalgia", "Pop", "3:23"),
];

/// Insert every seed song into `catalog`, in order
pub fn load_seed_songs(catalog: &mut Catalog) {
    for (title, artist, album, genre, duration) in SEED_SONGS {
        catalog.insert(title, artist, album, genre, duration);
    }
}

/// Build a catalog holding only the seed songs
pub fn seeded_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    load_seed_songs(&mut catalog);
    catalog
}
