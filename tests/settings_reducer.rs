mod common;

use common::config;
use memory_match::game::{ConfigPatch, MAX_GRID_SIZE, MIN_GRID_SIZE};
use memory_match::mvi::Reducer;
use memory_match::ui::settings::{
    SettingsDialogState, SettingsField, SettingsIntent, SettingsReducer, MAX_MOVE_BUDGET,
};

fn themes() -> Vec<String> {
    ["numbers", "emojis", "animals"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn loaded(grid_size: u8, min_moves: u32) -> SettingsDialogState {
    SettingsReducer::reduce(
        SettingsDialogState::Hidden,
        SettingsIntent::Load {
            config: config(grid_size, min_moves),
            themes: themes(),
        },
    )
}

fn reduce_all(state: SettingsDialogState, intents: Vec<SettingsIntent>) -> SettingsDialogState {
    intents
        .into_iter()
        .fold(state, |state, intent| SettingsReducer::reduce(state, intent))
}

#[test]
fn load_shows_dialog() {
    let state = loaded(4, 10);

    assert!(state.is_visible());
    assert_eq!(state.focused_field(), Some(SettingsField::GridSize));
    assert_eq!(state.draft(), Some(&config(4, 10)));
    assert_eq!(state.patch(), None);
}

#[test]
fn close_hides_dialog() {
    let state = SettingsReducer::reduce(loaded(4, 10), SettingsIntent::Close);
    assert_eq!(state, SettingsDialogState::Hidden);
}

#[test]
fn focus_wraps_around() {
    let state = SettingsReducer::reduce(loaded(4, 10), SettingsIntent::MoveUp);
    assert_eq!(state.focused_field(), Some(SettingsField::Theme));

    let state = SettingsReducer::reduce(state, SettingsIntent::MoveDown);
    assert_eq!(state.focused_field(), Some(SettingsField::GridSize));
}

#[test]
fn grid_size_is_clamped() {
    let state = reduce_all(loaded(MAX_GRID_SIZE, 10), vec![SettingsIntent::Increase]);
    assert_eq!(state.draft().unwrap().grid_size, MAX_GRID_SIZE);
    assert_eq!(state.patch(), None);

    let state = reduce_all(
        loaded(MIN_GRID_SIZE + 1, 10),
        vec![SettingsIntent::Decrease, SettingsIntent::Decrease],
    );
    assert_eq!(state.draft().unwrap().grid_size, MIN_GRID_SIZE);
}

#[test]
fn move_budget_stays_in_range() {
    let state = reduce_all(
        loaded(4, 1),
        vec![SettingsIntent::MoveDown, SettingsIntent::Decrease],
    );
    assert_eq!(state.draft().unwrap().min_moves, 1);

    let state = reduce_all(
        loaded(4, MAX_MOVE_BUDGET),
        vec![SettingsIntent::MoveDown, SettingsIntent::Increase],
    );
    assert_eq!(state.draft().unwrap().min_moves, MAX_MOVE_BUDGET);
}

#[test]
fn theme_cycles_both_ways() {
    let state = reduce_all(
        loaded(4, 10),
        vec![SettingsIntent::MoveUp, SettingsIntent::Decrease],
    );
    assert_eq!(state.draft().unwrap().theme, "animals");

    let state = SettingsReducer::reduce(state, SettingsIntent::Increase);
    let state = SettingsReducer::reduce(state, SettingsIntent::Increase);
    assert_eq!(state.draft().unwrap().theme, "emojis");
}

#[test]
fn edits_produce_a_patch_of_changed_fields() {
    let state = reduce_all(
        loaded(4, 10),
        vec![
            SettingsIntent::Increase,
            SettingsIntent::Increase,
            SettingsIntent::MoveUp,
            SettingsIntent::Increase,
        ],
    );

    assert_eq!(
        state.patch(),
        Some(ConfigPatch {
            grid_size: Some(6),
            min_moves: None,
            theme: Some("emojis".to_string()),
        })
    );
}

#[test]
fn reverting_an_edit_clears_dirty() {
    let state = reduce_all(
        loaded(4, 10),
        vec![SettingsIntent::Increase, SettingsIntent::Decrease],
    );

    let SettingsDialogState::Visible { dirty, .. } = state else {
        panic!("dialog should be visible");
    };
    assert!(!dirty);
}

#[test]
fn escape_with_changes_asks_for_confirmation() {
    let state = reduce_all(
        loaded(4, 10),
        vec![SettingsIntent::Increase, SettingsIntent::RequestClose],
    );
    let SettingsDialogState::Visible {
        confirm_discard, ..
    } = &state
    else {
        panic!("dialog should stay open");
    };
    assert!(*confirm_discard);

    let state = SettingsReducer::reduce(state, SettingsIntent::RequestClose);
    assert_eq!(state, SettingsDialogState::Hidden);
}

#[test]
fn editing_after_escape_cancels_confirmation() {
    let state = reduce_all(
        loaded(4, 10),
        vec![
            SettingsIntent::Increase,
            SettingsIntent::RequestClose,
            SettingsIntent::Increase,
        ],
    );
    let SettingsDialogState::Visible {
        confirm_discard, ..
    } = state
    else {
        panic!("dialog should stay open");
    };
    assert!(!confirm_discard);
}

#[test]
fn escape_without_changes_closes() {
    let state = SettingsReducer::reduce(loaded(4, 10), SettingsIntent::RequestClose);
    assert_eq!(state, SettingsDialogState::Hidden);
}

#[test]
fn intents_on_hidden_dialog_are_ignored() {
    let state = reduce_all(
        SettingsDialogState::Hidden,
        vec![
            SettingsIntent::MoveDown,
            SettingsIntent::Increase,
            SettingsIntent::RequestClose,
        ],
    );
    assert_eq!(state, SettingsDialogState::Hidden);
}
