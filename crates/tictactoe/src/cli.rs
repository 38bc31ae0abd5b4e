//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against a computer that plays at random
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the computer's moves (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play random-vs-random games without a UI and print the tally as JSON
    Autoplay {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for both sides (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },
}
