//! tictactoe - play against a random computer in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tictactoe::{AppConfig, Cli, Command, run_autoplay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, seed } => {
            let config = load_config(config, seed)?;
            run_tui(config).await
        }
        Command::Autoplay {
            games,
            config,
            seed,
        } => run_headless(games, load_config(config, seed)?),
    }
}

fn load_config(path: Option<PathBuf>, seed: Option<u64>) -> Result<AppConfig> {
    Ok(AppConfig::load(path.as_deref())?.with_seed(seed))
}

/// Plays random-vs-random games and prints the tally as JSON.
fn run_headless(games: u32, config: AppConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    info!(games, "Running autoplay");
    let stats = run_autoplay(&config, games);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
