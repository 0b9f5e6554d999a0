use anyhow::Result;
use clap::{Parser, Subcommand};
use gasa::{App, Catalog, Config, ProgressStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gasa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print your learning statistics
    Stats,
    /// List songs with per-song progress
    Songs,
    /// Wipe all progress and start over
    Reset {
        /// Confirm the wipe; without it nothing happens
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gasa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Stats) => print_stats(),
        Some(Commands::Songs) => print_songs(),
        Some(Commands::Reset { yes }) => reset_progress(yes),
        None => {
            // Launch TUI
            let config = Config::load()?;
            let mut app = App::new(config)?;
            app.run().await?;
            Ok(())
        }
    }
}

fn print_stats() -> Result<()> {
    let store = ProgressStore::load(Config::data_dir()?);
    let stats = store.stats();

    println!("Words learned:    {}", stats.total_words_learned);
    println!("Songs completed:  {}", stats.total_songs_completed);
    println!("Current streak:   {} days (best {})", stats.current_streak, stats.longest_streak);
    println!("Today:            {}/{} words", stats.today_words, stats.daily_goal);
    println!("Total reviews:    {}", stats.total_reviews);

    let unlocked = store.achievements().iter().filter(|a| a.is_unlocked()).count();
    println!("Achievements:     {}/{}", unlocked, store.achievements().len());
    Ok(())
}

fn print_songs() -> Result<()> {
    let catalog = Catalog::new();
    let store = ProgressStore::load(Config::data_dir()?);

    for song in catalog.songs() {
        let learned = store.learned_count(&catalog, &song.id);
        let total = song.word_count();
        let status = match store.song_progress(&song.id) {
            Some(progress) if progress.completed_at.is_some() => "completed",
            Some(_) => "started",
            None => "not started",
        };
        println!("{:<20} {:<12} {learned:>2}/{total} words  ({status})", song.title, song.artist);
    }
    Ok(())
}

fn reset_progress(yes: bool) -> Result<()> {
    if !yes {
        println!("This wipes all learning progress. Re-run with --yes to confirm.");
        return Ok(());
    }

    let mut store = ProgressStore::load(Config::data_dir()?);
    store.reset();
    println!("Progress reset.");
    Ok(())
}
