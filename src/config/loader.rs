use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/memory-match/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("memory-match").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Custom themes have a name and at least one symbol, and no name repeats
    /// - The game section describes a valid session (grid size, move budget,
    ///   known theme)
    /// - The UI tick rate is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for theme in &self.themes {
            if theme.name.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Theme name must not be empty".to_string(),
                });
            }
            if theme.symbols.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Theme '{}' has no symbols", theme.name),
                });
            }
            if !seen.insert(theme.name.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Theme '{}' is defined more than once", theme.name),
                });
            }
        }

        self.session_config()
            .validate(&self.theme_registry())
            .map_err(|e| ConfigError::ValidationError {
                message: e.to_string(),
            })?;

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
