use anyhow::Result;
use clap::Parser;
use music_catalog::{Session, SessionConfig};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "music-catalog")]
#[command(about = "Manage a small in-memory music catalog", long_about = None)]
struct Args {
    /// Start with an empty catalog instead of the seed songs
    #[arg(long)]
    empty: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = SessionConfig::new().with_seed(!args.empty);
    let catalog = config.build_catalog();

    log::info!(
        "Catalog ready: {} songs, {} albums, {} artists",
        catalog.song_count(),
        catalog.album_count(),
        catalog.artist_count()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(catalog, stdin.lock(), stdout.lock());
    session.run()
}
