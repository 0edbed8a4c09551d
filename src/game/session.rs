//! Session configuration: the knobs a player may change between runs.

use serde::{Deserialize, Serialize};

use crate::game::error::GameError;
use crate::game::theme::{ThemeRegistry, DEFAULT_THEME};

pub const MIN_GRID_SIZE: u8 = 2;
pub const MAX_GRID_SIZE: u8 = 10;
pub const DEFAULT_GRID_SIZE: u8 = 4;
pub const DEFAULT_MIN_MOVES: u32 = 10;

/// Configuration a run is built from.
///
/// The session config may change at any time, but a run keeps the copy it
/// was started with until the next reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub grid_size: u8,
    pub min_moves: u32,
    pub theme: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            min_moves: DEFAULT_MIN_MOVES,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl SessionConfig {
    /// Checks ranges and that the theme is known to `themes`.
    pub fn validate(&self, themes: &ThemeRegistry) -> Result<(), GameError> {
        check_grid_size(self.grid_size)?;
        if self.min_moves < 1 {
            return Err(GameError::InvalidMinMoves {
                value: self.min_moves,
            });
        }
        themes.get(&self.theme)?;
        Ok(())
    }

    /// Returns a copy with every field present in `patch` replaced.
    pub fn merged(&self, patch: &ConfigPatch) -> Self {
        Self {
            grid_size: patch.grid_size.unwrap_or(self.grid_size),
            min_moves: patch.min_moves.unwrap_or(self.min_moves),
            theme: patch.theme.clone().unwrap_or_else(|| self.theme.clone()),
        }
    }
}

/// Partial session config; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPatch {
    pub grid_size: Option<u8>,
    pub min_moves: Option<u32>,
    pub theme: Option<String>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        self.grid_size.is_none() && self.min_moves.is_none() && self.theme.is_none()
    }
}

pub fn check_grid_size(size: u8) -> Result<(), GameError> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GameError::InvalidGridSize {
            size,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_classic_board() {
        let config = SessionConfig::default();
        assert_eq!(config.grid_size, 4);
        assert_eq!(config.min_moves, 10);
        assert_eq!(config.theme, "numbers");
        assert!(config.validate(&ThemeRegistry::builtin()).is_ok());
    }

    #[test]
    fn grid_size_bounds() {
        assert!(check_grid_size(1).is_err());
        assert!(check_grid_size(2).is_ok());
        assert!(check_grid_size(10).is_ok());
        assert!(matches!(
            check_grid_size(11),
            Err(GameError::InvalidGridSize { size: 11, .. })
        ));
    }

    #[test]
    fn zero_min_moves_rejected() {
        let config = SessionConfig {
            min_moves: 0,
            ..SessionConfig::default()
        };
        assert_eq!(
            config.validate(&ThemeRegistry::builtin()),
            Err(GameError::InvalidMinMoves { value: 0 })
        );
    }

    #[test]
    fn unknown_theme_rejected() {
        let config = SessionConfig {
            theme: "planets".to_string(),
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(&ThemeRegistry::builtin()),
            Err(GameError::UnknownTheme { .. })
        ));
    }

    #[test]
    fn merge_keeps_missing_fields() {
        let base = SessionConfig::default();
        let merged = base.merged(&ConfigPatch {
            min_moves: Some(3),
            ..ConfigPatch::default()
        });
        assert_eq!(merged.grid_size, base.grid_size);
        assert_eq!(merged.min_moves, 3);
        assert_eq!(merged.theme, base.theme);
    }

    #[test]
    fn empty_patch() {
        assert!(ConfigPatch::default().is_empty());
        assert!(!ConfigPatch {
            theme: Some("emojis".to_string()),
            ..ConfigPatch::default()
        }
        .is_empty());
    }
}
