//! Interactive menu loop over any line-oriented input and output

use super::menu::MenuChoice;
use crate::model::Catalog;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

/// Interactive session dispatching menu choices to a catalog
///
/// End of input at any prompt ends the session like choosing "0".
pub struct Session<R, W> {
    catalog: Catalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a new session over the given catalog and streams
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Current catalog state
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Consume the session, returning the catalog and output stream
    pub fn into_parts(self) -> (Catalog, W) {
        (self.catalog, self.output)
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("Choose an option: ")? else {
                log::debug!("Input closed at menu prompt");
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    log::debug!("Menu choice: {:?}", choice);
                    if self.dispatch(choice)?.is_break() {
                        break;
                    }
                }
                Err(e) => {
                    log::debug!("{}", e);
                    writeln!(self.output, "Invalid choice, try again.\n")?;
                }
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "=== Music Library Menu ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Prompt for one line; None once input is exhausted
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_context(|| format!("Failed to read input for prompt {:?}", label))?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>> {
        match choice {
            MenuChoice::Exit => return Ok(ControlFlow::Break(())),
            MenuChoice::ListSongs => self.list_songs()?,
            MenuChoice::ListAlbums => self.list_albums()?,
            MenuChoice::ListArtists => self.list_artists()?,
            MenuChoice::AddSong => return self.add_song(),
            MenuChoice::Search => return self.search(),
            MenuChoice::SortByTitle => self.sort_songs()?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn list_songs(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            writeln!(self.output, "No songs in the library.\n")?;
            return Ok(());
        }

        writeln!(self.output, "\n--- All Songs ---")?;
        for (i, song) in self.catalog.songs().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, song)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn list_albums(&mut self) -> Result<()> {
        if self.catalog.album_count() == 0 {
            writeln!(self.output, "No albums in the library.\n")?;
            return Ok(());
        }

        writeln!(self.output, "\n--- Albums ---")?;
        for album in self.catalog.albums() {
            writeln!(
                self.output,
                "{} by {}, Songs: [{}]",
                album.title,
                album.artist,
                album.song_titles.join(", ")
            )?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn list_artists(&mut self) -> Result<()> {
        if self.catalog.artist_count() == 0 {
            writeln!(self.output, "No artists in the library.\n")?;
            return Ok(());
        }

        writeln!(self.output, "\n--- Artists ---")?;
        for artist in self.catalog.artists() {
            writeln!(
                self.output,
                "{}, Albums: [{}]",
                artist.name,
                artist.album_titles.join(", ")
            )?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn add_song(&mut self) -> Result<ControlFlow<()>> {
        const FIELDS: [&str; 5] = [
            "Enter song title: ",
            "Enter artist: ",
            "Enter album: ",
            "Enter genre: ",
            "Enter duration: ",
        ];

        let mut values = Vec::with_capacity(FIELDS.len());
        for label in FIELDS {
            match self.prompt(label)? {
                Some(value) => values.push(value),
                None => {
                    log::debug!("Input closed while adding a song");
                    return Ok(ControlFlow::Break(()));
                }
            }
        }

        let [title, artist, album, genre, duration]: [String; 5] = values
            .try_into()
            .map_err(|_| anyhow::anyhow!("Expected {} song fields", FIELDS.len()))?;

        let song = self.catalog.insert(title, artist, album, genre, duration);
        writeln!(self.output, "\nAdded song: {}\n", song)?;
        Ok(ControlFlow::Continue(()))
    }

    fn search(&mut self) -> Result<ControlFlow<()>> {
        let Some(query) = self.prompt("Enter song title to search: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let found: Vec<_> = self.catalog.search(&query).collect();
        log::debug!("Search {:?} matched {} song(s)", query, found.len());

        if found.is_empty() {
            writeln!(self.output, "No songs found with that title.")?;
        } else {
            writeln!(self.output, "\n--- Search Results ---")?;
            for song in found {
                writeln!(self.output, "{}", song)?;
            }
        }
        writeln!(self.output)?;
        Ok(ControlFlow::Continue(()))
    }

    fn sort_songs(&mut self) -> Result<()> {
        self.catalog.sort_by_title();
        writeln!(self.output, "Songs sorted alphabetically by title.\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seeded_catalog;
    use std::io::Cursor;

    fn run_session(catalog: Catalog, input: &str) -> (Catalog, String) {
        let mut session = Session::new(catalog, Cursor::new(input.as_bytes().to_vec()), Vec::new());
        session.run().unwrap();
        let (catalog, output) = session.into_parts();
        (catalog, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_exit_immediately() {
        let (_, out) = run_session(seeded_catalog(), "0\n");
        assert!(out.starts_with("=== Music Library Menu ===\n1. Display all songs\n"));
        assert!(out.contains("0. Exit\n"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_, out) = run_session(seeded_catalog(), "");
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (_, out) = run_session(seeded_catalog(), "9\n 1\n0\n");
        assert_eq!(out.matches("Invalid choice, try again.").count(), 2);
        assert_eq!(out.matches("=== Music Library Menu ===").count(), 3);
    }

    #[test]
    fn test_list_songs_numbered() {
        let (_, out) = run_session(seeded_catalog(), "1\n0\n");
        assert!(out.contains("--- All Songs ---\n1. Shape of You by Ed Sheeran (Divide)\n"));
        assert!(out.contains("11. Levitating by Dua Lipa (Future Nostalgia)\n"));
    }

    #[test]
    fn test_empty_catalog_messages() {
        let (_, out) = run_session(Catalog::new(), "1\n2\n3\n5\nx\n0\n");
        assert!(out.contains("No songs in the library."));
        assert!(out.contains("No albums in the library."));
        assert!(out.contains("No artists in the library."));
        assert!(out.contains("No songs found with that title."));
    }

    #[test]
    fn test_list_albums_and_artists() {
        let (_, out) = run_session(seeded_catalog(), "2\n3\n0\n");
        assert!(out.contains("Divide by Ed Sheeran, Songs: [Shape of You, Perfect]\n"));
        assert!(out.contains("--- Artists ---\nEd Sheeran, Albums: [Divide]\n"));
    }

    #[test]
    fn test_add_song() {
        let input = "4\nHello\nAdele\n25\nSoul\n4:55\n0\n";
        let (catalog, out) = run_session(seeded_catalog(), input);

        assert!(out.contains("Added song: Hello by Adele (25)"));
        assert_eq!(catalog.song_count(), 12);
        let adele = catalog.artist("Adele").unwrap();
        let albums: Vec<_> = catalog.artist_albums(adele).map(|a| a.title.as_str()).collect();
        assert_eq!(albums, vec!["21", "25"]);
    }

    #[test]
    fn test_add_song_interrupted() {
        let (catalog, out) = run_session(seeded_catalog(), "4\nHello\nAdele\n");
        assert_eq!(catalog.song_count(), 11);
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_search_and_sort() {
        let (catalog, out) = run_session(seeded_catalog(), "5\nshape\n6\n0\n");
        assert!(out.contains("--- Search Results ---\nShape of You by Ed Sheeran (Divide)\n"));
        assert!(out.contains("Songs sorted alphabetically by title."));
        assert_eq!(catalog.songs().next().unwrap().title, "Believer");
    }

    #[test]
    fn test_crlf_input() {
        let (catalog, _) = run_session(Catalog::new(), "4\r\nA\r\nB\r\nC\r\nD\r\n1:00\r\n0\r\n");
        let song = catalog.songs().next().unwrap();
        assert_eq!(song.title, "A");
        assert_eq!(song.duration, "1:00");
    }
}
