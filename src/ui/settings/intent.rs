use crate::game::SessionConfig;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    Load {
        config: SessionConfig,
        themes: Vec<String>,
    },
    Close,
    /// User pressed Escape. If dirty and not yet confirming, sets confirm_discard flag.
    /// If clean or already confirming, transitions to Hidden.
    RequestClose,
    MoveUp,
    MoveDown,
    /// Raise the focused value (next theme for the theme row).
    Increase,
    /// Lower the focused value (previous theme for the theme row).
    Decrease,
}

impl Intent for SettingsIntent {}
