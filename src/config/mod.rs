//! Configuration file handling.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, GameSettings, LoggingSettings, ThemeDefinition, UiSettings};
