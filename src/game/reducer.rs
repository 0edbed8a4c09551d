//! Reducer for the game state machine.
//!
//! Pure: board generation, timer scheduling and notifications are handled by
//! [`GameMachine`](crate::game::GameMachine) around the dispatch call.

use crate::game::clock::{time_limit, GameClock};
use crate::game::deck::TileId;
use crate::game::intent::GameIntent;
use crate::game::resolver::resolve;
use crate::game::score::final_score;
use crate::game::state::{GameState, LossReason, RunId, RunStatus, Selection};
use crate::mvi::Reducer;

pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameState;
    type Intent = GameIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GameIntent::Start { run, config, board } => {
                let mut clock = GameClock::default();
                clock.start(time_limit(config.grid_size));
                GameState {
                    run,
                    board,
                    selection: Selection::default(),
                    status: RunStatus::Playing,
                    moves: 0,
                    clock,
                    score: 0,
                    run_config: config.clone(),
                    config,
                    input_locked: false,
                }
            }
            GameIntent::SelectTile { id } => select_tile(state, id),
            GameIntent::Configure { config } => GameState { config, ..state },
            GameIntent::ClockTick { run } => clock_tick(state, run),
            GameIntent::MismatchElapsed { run } => mismatch_elapsed(state, run),
        }
    }
}

fn select_tile(mut state: GameState, id: TileId) -> GameState {
    if !state.status.is_playing()
        || state.input_locked
        || !state.board.contains(id)
        || state.selection.is_solved(id)
    {
        return state;
    }

    let flipped = state.selection.flipped();
    match (flipped.len(), flipped.first().copied()) {
        (0, _) => state.selection.flip(id),
        // Second click on the same tile turns it back; not a move.
        (1, Some(first)) if first == id => state.selection.clear_flipped(),
        (1, Some(first)) => {
            state.selection.flip(id);
            state.input_locked = true;
            state.moves += 1;
            if resolve(&state.board, first, id).apply(&mut state.selection) {
                state.input_locked = false;
            }
            state = settle(state);
        }
        _ => {}
    }
    state
}

/// Outcome checks after a move. The budget check runs first: the move count
/// grows before the match is known, so an over-budget completing move loses.
fn settle(mut state: GameState) -> GameState {
    let min_moves = state.run_config.min_moves;
    if state.moves > min_moves {
        state.status = RunStatus::Lost(LossReason::MovesExceeded);
    } else if state.all_solved() {
        state.score = final_score(state.clock.time_left(), min_moves, state.moves);
        state.status = RunStatus::Won;
    } else {
        return state;
    }
    state.clock.stop();
    state.input_locked = false;
    state
}

fn clock_tick(mut state: GameState, run: RunId) -> GameState {
    if run != state.run || !state.status.is_playing() {
        return state;
    }
    state.clock.tick();
    if state.clock.is_expired() {
        state.status = RunStatus::Lost(LossReason::Timeout);
        state.input_locked = false;
    }
    state
}

fn mismatch_elapsed(mut state: GameState, run: RunId) -> GameState {
    if run != state.run || !state.status.is_playing() || !state.input_locked {
        return state;
    }
    state.selection.clear_flipped();
    state.input_locked = false;
    state
}
