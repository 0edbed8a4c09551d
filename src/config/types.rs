use serde::{Deserialize, Serialize};

use crate::game::{
    IconSymbol, SessionConfig, Theme, ThemeRegistry, DEFAULT_GRID_SIZE, DEFAULT_MIN_MOVES,
    DEFAULT_THEME,
};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameSettings,
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Extra symbol sets. A theme named like a built-in replaces it.
    #[serde(default)]
    pub themes: Vec<ThemeDefinition>,
}

/// Settings for new runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Side length of the board (2..=10).
    #[serde(default = "default_grid_size")]
    pub grid_size: u8,
    /// Move budget of a run (default: 10).
    #[serde(default = "default_min_moves")]
    pub min_moves: u32,
    /// Name of the symbol set (default: "numbers").
    #[serde(default = "default_theme")]
    pub theme: String,
}

/// Terminal presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Event poll interval in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub dark_mode: bool,
    /// Ring the terminal bell on win and loss (default: true).
    #[serde(default = "default_bell")]
    pub bell: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log destination. Logging is off when unset.
    #[serde(default)]
    pub file: Option<String>,
}

/// A user supplied symbol set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub name: String,
    pub symbols: Vec<String>,
}

fn default_grid_size() -> u8 {
    DEFAULT_GRID_SIZE
}

fn default_min_moves() -> u32 {
    DEFAULT_MIN_MOVES
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_bell() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            min_moves: default_min_moves(),
            theme: default_theme(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            dark_mode: false,
            bell: default_bell(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Built-in themes overlaid with the configured ones.
    pub fn theme_registry(&self) -> ThemeRegistry {
        ThemeRegistry::builtin().with_custom(self.themes.iter().map(|definition| {
            Theme::new(
                definition.name.clone(),
                definition
                    .symbols
                    .iter()
                    .map(|symbol| IconSymbol::new(symbol.as_str()))
                    .collect(),
            )
        }))
    }

    /// Session config for the first run.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            grid_size: self.game.grid_size,
            min_moves: self.game.min_moves,
            theme: self.game.theme.clone(),
        }
    }
}
