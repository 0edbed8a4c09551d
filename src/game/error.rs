use thiserror::Error;

/// Errors raised by the game core.
///
/// Selecting a tile never fails; only configuration and board construction
/// can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Grid size {size} is outside the supported range {min}..={max}")]
    InvalidGridSize { size: u8, min: u8, max: u8 },

    #[error("Minimum moves must be at least 1 (got {value})")]
    InvalidMinMoves { value: u32 },

    #[error("Unknown theme '{name}'")]
    UnknownTheme { name: String },

    #[error("Theme '{name}' has no symbols")]
    EmptyTheme { name: String },
}
