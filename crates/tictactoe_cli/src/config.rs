//! Game configuration loaded from TOML.

use crate::session::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_core::Mark;
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for a game round.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Two humans or human against engine.
    #[serde(default)]
    mode: GameMode,

    /// Mark played by the human against the engine (X moves first).
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Pause before each engine move, in milliseconds.
    #[serde(default = "default_engine_delay_ms")]
    engine_delay_ms: u64,

    /// Name shown for the engine.
    #[serde(default = "default_engine_name")]
    engine_name: String,

    /// Name shown for the human against the engine.
    #[serde(default = "default_human_name")]
    human_name: String,
}

fn default_human_mark() -> Mark {
    Mark::X
}

fn default_engine_delay_ms() -> u64 {
    700
}

fn default_engine_name() -> String {
    "Engine".to_string()
}

fn default_human_name() -> String {
    "You".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            human_mark: default_human_mark(),
            engine_delay_ms: default_engine_delay_ms(),
            engine_name: default_engine_name(),
            human_name: default_human_name(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, human_mark = ?config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        human_mark: Option<Mark>,
        engine_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(mark) = human_mark {
            self.human_mark = mark;
        }
        if let Some(ms) = engine_delay_ms {
            self.engine_delay_ms = ms;
        }
        self
    }

    /// Engine think delay.
    pub fn engine_delay(&self) -> Duration {
        Duration::from_millis(self.engine_delay_ms)
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
