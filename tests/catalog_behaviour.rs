use music_catalog::model::Catalog;
use music_catalog::seed::{seeded_catalog, SEED_SONGS};
use std::ptr;

fn song_titles(catalog: &Catalog) -> Vec<String> {
    catalog.songs().map(|s| s.title.clone()).collect()
}

#[test]
fn test_seed_scenario() {
    let catalog = seeded_catalog();

    let expected: Vec<String> = SEED_SONGS.iter().map(|s| s.0.to_string()).collect();
    assert_eq!(song_titles(&catalog), expected);

    let artists: Vec<_> = catalog.artists().map(|a| a.name).collect();
    assert_eq!(
        artists,
        vec![
            "Ed Sheeran",
            "The Weeknd",
            "Adele",
            "Passenger",
            "OneRepublic",
            "Shawn Mendes",
            "Imagine Dragons",
            "The Chainsmokers",
            "Dua Lipa",
        ]
    );
}

#[test]
fn test_listing_is_repeatable() {
    let catalog = seeded_catalog();

    assert_eq!(song_titles(&catalog), song_titles(&catalog));
    assert_eq!(
        catalog.albums().collect::<Vec<_>>(),
        catalog.albums().collect::<Vec<_>>()
    );
    assert_eq!(
        catalog.artists().collect::<Vec<_>>(),
        catalog.artists().collect::<Vec<_>>()
    );
}

#[test]
fn test_insert_appears_once_everywhere() {
    let mut catalog = seeded_catalog();
    catalog.insert("Hello", "Adele", "25", "Soul", "4:55");
    catalog.insert("Easy On Me", "Adele", "30", "Soul", "3:44");

    let hello: Vec<_> = catalog.songs().filter(|s| s.title == "Hello").collect();
    assert_eq!(hello.len(), 1);

    let album = catalog.album("25").unwrap();
    assert_eq!(album.song_titles(), vec!["Hello"]);

    let adele = catalog.artist("Adele").unwrap();
    let albums: Vec<_> = catalog.artist_albums(adele).map(|a| a.title.as_str()).collect();
    assert_eq!(albums, vec!["21", "25", "30"]);
}

#[test]
fn test_album_shares_catalog_song() {
    let mut catalog = Catalog::new();
    catalog.insert("Closer", "The Chainsmokers", "Collage", "EDM", "4:04");

    let listed = catalog.songs().next().unwrap();
    let grouped = catalog.album("Collage").unwrap().songs().next().unwrap();
    assert!(ptr::eq(listed, grouped));
}

#[test]
fn test_album_artist_quirk() {
    let mut catalog = Catalog::new();
    catalog.insert("song1", "Alice", "X", "Pop", "3:00");
    catalog.insert("song2", "Bob", "X", "Pop", "3:00");

    let albums: Vec<_> = catalog.albums().collect();
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].artist, "Alice");
    assert_eq!(albums[0].song_titles, vec!["song1", "song2"]);

    let artists: Vec<_> = catalog.artists().collect();
    assert_eq!(artists.len(), 2);
    assert_eq!(artists[0].album_titles, vec!["X"]);
    assert_eq!(artists[1].album_titles, vec!["X"]);
}

#[test]
fn test_sort_stability() {
    let mut catalog = Catalog::new();
    catalog.insert("B", "x", "b", "g", "1:00");
    catalog.insert("a", "x", "a", "g", "1:00");
    catalog.insert("A", "x", "a2", "g", "1:00");

    catalog.sort_by_title();
    assert_eq!(song_titles(&catalog), vec!["a", "A", "B"]);
}

#[test]
fn test_search_seeded() {
    let catalog = seeded_catalog();

    let hits: Vec<_> = catalog.search("shape").map(|s| s.title.as_str()).collect();
    assert_eq!(hits, vec!["Shape of You"]);
    assert_eq!(catalog.search("").count(), 11);

    // Order follows the song list
    let hits: Vec<_> = catalog.search("LI").map(|s| s.title.as_str()).collect();
    assert_eq!(
        hits,
        vec![
            "Blinding Lights",
            "Someone Like You",
            "Believer",
            "Rolling in the Deep",
        ]
    );
}
