//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_engine::Timings;
use tracing::{debug, info, instrument};

/// Pacing, randomness and logging settings.
///
/// Every field is optional in the file; missing keys take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay before the computer replies, in milliseconds.
    computer_delay_ms: u64,

    /// How long a finished board stays visible before fading, in milliseconds.
    result_display_ms: u64,

    /// Fade length before the board clears, in milliseconds.
    fade_ms: u64,

    /// Length of the per-cell placement animation, in milliseconds.
    placement_ms: u64,

    /// Fixed seed for the computer's moves. Random when absent.
    seed: Option<u64>,

    /// Where the terminal UI writes its log.
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        let timings = Timings::default();
        Self {
            computer_delay_ms: timings.computer_delay.as_millis() as u64,
            result_display_ms: timings.result_display.as_millis() as u64,
            fade_ms: timings.fade.as_millis() as u64,
            placement_ms: 400,
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the seed when `seed` is set (command-line override).
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Engine timer delays.
    pub fn timings(&self) -> Timings {
        Timings {
            computer_delay: Duration::from_millis(self.computer_delay_ms),
            result_display: Duration::from_millis(self.result_display_ms),
            fade: Duration::from_millis(self.fade_ms),
        }
    }

    /// Placement animation length.
    pub fn placement(&self) -> Duration {
        Duration::from_millis(self.placement_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine_timings() {
        let config = AppConfig::default();
        assert_eq!(config.timings(), Timings::default());
        assert_eq!(config.seed(), &None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str("fade_ms = 250\nseed = 9\n").unwrap();
        assert_eq!(config.timings().fade, Duration::from_millis(250));
        assert_eq!(config.timings().computer_delay, Duration::from_millis(1300));
        assert_eq!(config.seed(), &Some(9));
    }

    #[test]
    fn test_seed_override() {
        let config = AppConfig::default().with_seed(Some(3));
        assert_eq!(config.seed(), &Some(3));
        assert_eq!(config.with_seed(None).seed(), &Some(3));
    }
}
