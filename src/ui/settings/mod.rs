mod intent;
mod reducer;
mod state;

pub use intent::SettingsIntent;
pub use reducer::{SettingsReducer, MAX_MOVE_BUDGET};
pub use state::{SettingsDialogState, SettingsField};
