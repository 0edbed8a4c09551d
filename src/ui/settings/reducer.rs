use crate::game::{SessionConfig, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::{SettingsDialogState, SettingsField};

/// Largest move budget the dialog offers.
pub const MAX_MOVE_BUDGET: u32 = 999;

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsDialogState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::Load { config, themes } => SettingsDialogState::Visible {
                original: config.clone(),
                draft: config,
                themes,
                focused: 0,
                dirty: false,
                confirm_discard: false,
            },
            SettingsIntent::Close => SettingsDialogState::Hidden,
            SettingsIntent::RequestClose => match state {
                SettingsDialogState::Visible {
                    dirty: true,
                    confirm_discard: false,
                    original,
                    draft,
                    themes,
                    focused,
                } => {
                    // First Escape with unsaved changes: ask for confirmation
                    SettingsDialogState::Visible {
                        original,
                        draft,
                        themes,
                        focused,
                        dirty: true,
                        confirm_discard: true,
                    }
                }
                _ => SettingsDialogState::Hidden,
            },
            SettingsIntent::MoveUp => move_focus(state, |focused, len| {
                if focused == 0 {
                    len - 1
                } else {
                    focused - 1
                }
            }),
            SettingsIntent::MoveDown => move_focus(state, |focused, len| {
                if focused + 1 >= len {
                    0
                } else {
                    focused + 1
                }
            }),
            SettingsIntent::Increase => adjust(state, 1),
            SettingsIntent::Decrease => adjust(state, -1),
        }
    }
}

fn move_focus(
    state: SettingsDialogState,
    step: impl FnOnce(usize, usize) -> usize,
) -> SettingsDialogState {
    match state {
        SettingsDialogState::Visible {
            original,
            draft,
            themes,
            focused,
            dirty,
            ..
        } => SettingsDialogState::Visible {
            original,
            draft,
            themes,
            focused: step(focused, SettingsField::ALL.len()),
            dirty,
            confirm_discard: false,
        },
        other => other,
    }
}

fn adjust(state: SettingsDialogState, delta: i64) -> SettingsDialogState {
    match state {
        SettingsDialogState::Visible {
            original,
            mut draft,
            themes,
            focused,
            ..
        } => {
            if let Some(field) = SettingsField::ALL.get(focused) {
                apply_delta(&mut draft, *field, &themes, delta);
            }
            let dirty = draft != original;
            SettingsDialogState::Visible {
                original,
                draft,
                themes,
                focused,
                dirty,
                confirm_discard: false,
            }
        }
        other => other,
    }
}

fn apply_delta(draft: &mut SessionConfig, field: SettingsField, themes: &[String], delta: i64) {
    match field {
        SettingsField::GridSize => {
            let next = (i64::from(draft.grid_size) + delta)
                .clamp(i64::from(MIN_GRID_SIZE), i64::from(MAX_GRID_SIZE));
            draft.grid_size = u8::try_from(next).unwrap_or(draft.grid_size);
        }
        SettingsField::MinMoves => {
            let next = (i64::from(draft.min_moves) + delta).clamp(1, i64::from(MAX_MOVE_BUDGET));
            draft.min_moves = u32::try_from(next).unwrap_or(draft.min_moves);
        }
        SettingsField::Theme => {
            if themes.is_empty() {
                return;
            }
            let len = themes.len() as i64;
            let current = themes
                .iter()
                .position(|name| *name == draft.theme)
                .map_or(0, |index| index as i64);
            let next = (current + delta).rem_euclid(len) as usize;
            draft.theme = themes[next].clone();
        }
    }
}
