//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_cricket::GameConfig;
use tracing::{debug, info, instrument};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "CRICKET_CONFIG";

/// Settings read from a TOML file.
///
/// ```toml
/// players = ["Ana", "Bob"]
///
/// [rules]
/// round_limit = 20
/// enforce_segments = true
/// ```
#[derive(Debug, Clone, Default, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Rules for new games.
    #[serde(default)]
    rules: GameConfig,

    /// Roster used when `play` is given no players.
    #[serde(default)]
    players: Vec<String>,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// The `[rules]` table must describe a playable game.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config
            .rules
            .validate()
            .map_err(|e| ConfigError::new(e.to_string()))?;

        info!(
            round_limit = config.rules.round_limit(),
            players = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads from `path`, else from `$CRICKET_CONFIG`, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
