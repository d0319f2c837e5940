//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::Mark;
use tracing::{debug, info, instrument};

/// Settings for a match against the computer.
///
/// ```toml
/// computer_mark = "O"
/// log_filter = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Mark played by the computer. The human gets the other one.
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_computer_mark() -> Mark {
    Mark::O
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl MatchConfig {
    /// Creates a configuration with the computer playing `computer_mark`.
    pub fn new(computer_mark: Mark) -> Self {
        Self {
            computer_mark,
            ..Self::default()
        }
    }

    /// Mark played by the human.
    pub fn human_mark(&self) -> Mark {
        self.computer_mark.opponent()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(computer_mark = %config.computer_mark, "Config loaded successfully");
        Ok(config)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            computer_mark: default_computer_mark(),
            log_filter: default_log_filter(),
        }
    }
}

/// Configuration error with location tracking.
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
