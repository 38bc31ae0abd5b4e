//! Terminal tic-tac-toe against a computer that plays at random.
//!
//! The rules, timers and opponent live in `tictactoe_engine`; this crate is
//! the presentation layer around them.
//!
//! - **Cli**: `play` (terminal UI) and `autoplay` (headless tally)
//! - **Config**: optional TOML file with timings, seed and log path
//! - **Tui**: ratatui rendering, keyboard and mouse input, timer loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod autoplay;
pub mod cli;
pub mod config;
pub mod tui;

pub use autoplay::run_autoplay;
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use tui::{App, run_tui};
