use crate::game::{ConfigPatch, SessionConfig};
use crate::mvi::UiState;

/// Editable rows of the settings dialog, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    GridSize,
    MinMoves,
    Theme,
}

impl SettingsField {
    pub const ALL: [SettingsField; 3] = [Self::GridSize, Self::MinMoves, Self::Theme];

    pub fn label(self) -> &'static str {
        match self {
            Self::GridSize => "Grid size",
            Self::MinMoves => "Move budget",
            Self::Theme => "Theme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SettingsDialogState {
    #[default]
    Hidden,
    Visible {
        /// Config as it was when the dialog opened.
        original: SessionConfig,
        draft: SessionConfig,
        /// Theme names the draft may cycle through.
        themes: Vec<String>,
        focused: usize,
        dirty: bool,
        /// When true, next Escape will discard changes. Set on first Escape when dirty.
        confirm_discard: bool,
    },
}

impl UiState for SettingsDialogState {}

impl SettingsDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn focused_field(&self) -> Option<SettingsField> {
        match self {
            Self::Visible { focused, .. } => SettingsField::ALL.get(*focused).copied(),
            Self::Hidden => None,
        }
    }

    pub fn draft(&self) -> Option<&SessionConfig> {
        match self {
            Self::Visible { draft, .. } => Some(draft),
            Self::Hidden => None,
        }
    }

    /// Fields the draft changed relative to the config the dialog opened with.
    pub fn patch(&self) -> Option<ConfigPatch> {
        let Self::Visible {
            original, draft, ..
        } = self
        else {
            return None;
        };
        let patch = ConfigPatch {
            grid_size: (draft.grid_size != original.grid_size).then_some(draft.grid_size),
            min_moves: (draft.min_moves != original.min_moves).then_some(draft.min_moves),
            theme: (draft.theme != original.theme).then(|| draft.theme.clone()),
        };
        (!patch.is_empty()).then_some(patch)
    }
}
