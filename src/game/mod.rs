//! Game engine: board construction, turn resolution, timing and scoring.
//!
//! The pure half ([`GameReducer`] driven by [`GameMachine`]) turns intents
//! into new states plus [`GameEffect`]s. The async half ([`GameEngine`])
//! owns the timers those effects ask for and serializes every input through
//! one actor.

pub mod clock;
pub mod deck;
mod effects;
mod engine;
mod error;
mod intent;
mod machine;
mod reducer;
pub mod resolver;
pub mod score;
mod session;
mod state;
pub mod theme;

pub use clock::{time_limit, GameClock, TICK_INTERVAL};
pub use deck::{Board, Tile, TileId};
pub use effects::{GameEffect, GameNotification};
pub use engine::{EngineError, GameEngine, GameHandle};
pub use error::GameError;
pub use intent::GameIntent;
pub use machine::GameMachine;
pub use reducer::GameReducer;
pub use resolver::MISMATCH_DELAY;
pub use session::{
    check_grid_size, ConfigPatch, SessionConfig, DEFAULT_GRID_SIZE, DEFAULT_MIN_MOVES,
    MAX_GRID_SIZE, MIN_GRID_SIZE,
};
pub use state::{GameSnapshot, GameState, LossReason, RunId, RunStatus, Selection};
pub use theme::{IconSymbol, Theme, ThemeRegistry, DEFAULT_THEME};
