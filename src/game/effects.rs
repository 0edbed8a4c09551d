//! Side effects derived from a state transition.

use std::collections::BTreeSet;
use std::time::Duration;

use serde::Serialize;

use crate::game::clock::TICK_INTERVAL;
use crate::game::deck::TileId;
use crate::game::resolver::MISMATCH_DELAY;
use crate::game::state::{GameState, LossReason, RunId, RunStatus};

/// Feedback for presentation (sound, banners). Never affects the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameNotification {
    Flip { id: TileId },
    Win { score: u32 },
    Lose { reason: LossReason },
}

/// Work the owner of a [`GameMachine`](crate::game::GameMachine) must carry
/// out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEffect {
    /// Abort every task still scheduled for `run`.
    CancelScheduled { run: RunId },
    /// Deliver a clock tick for `run` after `after`.
    ScheduleTick { run: RunId, after: Duration },
    /// Clear the mismatched pair of `run` after `after`.
    ScheduleMismatchClear { run: RunId, after: Duration },
    Notify(GameNotification),
}

/// The parts of a state needed to diff it against its successor.
#[derive(Debug, Clone)]
pub(crate) struct Checkpoint {
    run: RunId,
    status: RunStatus,
    face_up: BTreeSet<TileId>,
    time_left: u32,
    input_locked: bool,
}

impl Checkpoint {
    pub(crate) fn of(state: &GameState) -> Self {
        Self {
            run: state.run(),
            status: state.status(),
            face_up: state.selection().face_up(),
            time_left: state.time_left(),
            input_locked: state.input_locked(),
        }
    }

    /// Effects implied by moving from `self` to `after`.
    pub(crate) fn effects(&self, after: &GameState) -> Vec<GameEffect> {
        let mut effects = Vec::new();

        if after.run() != self.run {
            if self.status.is_playing() {
                effects.push(GameEffect::CancelScheduled { run: self.run });
            }
            if after.status().is_playing() {
                effects.push(GameEffect::ScheduleTick {
                    run: after.run(),
                    after: TICK_INTERVAL,
                });
            }
            return effects;
        }

        for id in after.selection().face_up().difference(&self.face_up) {
            effects.push(GameEffect::Notify(GameNotification::Flip { id: *id }));
        }

        if after.status().is_playing() {
            if after.time_left() < self.time_left {
                effects.push(GameEffect::ScheduleTick {
                    run: after.run(),
                    after: TICK_INTERVAL,
                });
            }
            if after.input_locked() && !self.input_locked {
                effects.push(GameEffect::ScheduleMismatchClear {
                    run: after.run(),
                    after: MISMATCH_DELAY,
                });
            }
        }

        if after.status().is_terminal() && !self.status.is_terminal() {
            effects.push(GameEffect::CancelScheduled { run: after.run() });
            let notification = match after.status() {
                RunStatus::Lost(reason) => GameNotification::Lose { reason },
                _ => GameNotification::Win {
                    score: after.score(),
                },
            };
            effects.push(GameEffect::Notify(notification));
        }

        effects
    }
}
