//! Borse - code practice game
//!
//! Single-user terminal drills for Morse code, braille, flag semaphore and
//! A1Z26. Progress is kept per day in a JSON file.

use borse::cli::Game;
use borse::config::{self, Config, MAX_WORDS_PER_GAME};
use borse::{AppContext, Encoding, WordSource};
use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "borse")]
#[command(about = "Practice reading Morse code, braille, flag semaphore and A1Z26")]
#[command(version)]
struct Args {
    /// Path to config file (default: ~/.config/borse/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the menu and play one session in this mode
    #[arg(short, long, value_enum)]
    mode: Option<Encoding>,

    /// Words per session, 1 to 1000 (overrides the config file)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_WORDS_PER_GAME as i64))]
    words: Option<u32>,

    /// Whitespace separated word list to use instead of the built-in one
    #[arg(long)]
    word_list: Option<PathBuf>,

    /// Seed for reproducible word selection
    #[arg(long)]
    seed: Option<u64>,

    /// Write a trace log (borse.log) next to the config file
    #[arg(short, long)]
    debug: bool,

    /// Write the effective config to the config path and exit
    #[arg(long)]
    write_config: bool,
}

/// Log to a file; the terminal belongs to the game
fn init_tracing(log_dir: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(log_dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("borse.log"))?;

    let filter = EnvFilter::try_from_env("BORSE_LOG").unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(config::default_config_path);

    if args.debug {
        let log_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(config::default_config_dir);
        init_tracing(&log_dir)?;
    }

    let mut config = Config::load(&config_path);
    if let Some(words) = args.words {
        config.words_per_game = words;
    }

    if args.write_config {
        config.save(&config_path)?;
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    let words = match &args.word_list {
        Some(path) => WordSource::from_file(path)?,
        None => WordSource::builtin(),
    };

    let ctx = AppContext::new(config, words, args.seed);
    let mut game = Game::new(ctx)?;
    let outcome = match args.mode {
        Some(mode) => game.play(mode),
        None => game.run(),
    };
    let ctx = game.shutdown()?;
    outcome?;

    let today = ctx.progress().day(Local::now().date_naive());
    println!(
        "Today: {} of {} words read correctly. Thanks for practicing!",
        today.correct, today.total
    );

    Ok(())
}
