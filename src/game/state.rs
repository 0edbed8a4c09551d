//! Game state: the single source of truth the presentation renders from.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::game::clock::GameClock;
use crate::game::deck::{Board, TileId};
use crate::game::session::SessionConfig;
use crate::mvi::UiState;

/// Generation number of a run. Bumped on every reset; deferred events carry
/// the run they were scheduled for so stale ones can be discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RunId(u64);

impl RunId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LossReason {
    /// The clock ran out while playing.
    Timeout,
    /// A move pushed the count past the move budget.
    MovesExceeded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// No board yet.
    #[default]
    Idle,
    Playing,
    Won,
    Lost(LossReason),
}

impl RunStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost(_))
    }
}

/// Face-up tiles: unresolved `flipped` (at most two) and matched `solved`.
/// The two sets never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    flipped: Vec<TileId>,
    solved: BTreeSet<TileId>,
}

impl Selection {
    pub fn flipped(&self) -> &[TileId] {
        &self.flipped
    }

    pub fn solved(&self) -> &BTreeSet<TileId> {
        &self.solved
    }

    pub fn is_solved(&self, id: TileId) -> bool {
        self.solved.contains(&id)
    }

    pub fn is_flipped(&self, id: TileId) -> bool {
        self.flipped.contains(&id)
    }

    pub fn is_face_up(&self, id: TileId) -> bool {
        self.is_flipped(id) || self.is_solved(id)
    }

    /// Every face-up id, flipped or solved.
    pub fn face_up(&self) -> BTreeSet<TileId> {
        self.solved
            .iter()
            .chain(self.flipped.iter())
            .copied()
            .collect()
    }

    pub(crate) fn flip(&mut self, id: TileId) {
        if self.flipped.len() < 2 && !self.is_face_up(id) {
            self.flipped.push(id);
        }
    }

    pub(crate) fn clear_flipped(&mut self) {
        self.flipped.clear();
    }

    pub(crate) fn mark_solved(&mut self, first: TileId, second: TileId) {
        self.flipped.retain(|id| *id != first && *id != second);
        self.solved.insert(first);
        self.solved.insert(second);
    }
}

/// Complete state of the session and its current run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameState {
    pub(super) run: RunId,
    pub(super) board: Board,
    pub(super) selection: Selection,
    pub(super) status: RunStatus,
    pub(super) moves: u32,
    pub(super) clock: GameClock,
    pub(super) score: u32,
    /// Config the current run was built with.
    pub(super) run_config: SessionConfig,
    /// Config the next reset will use.
    pub(super) config: SessionConfig,
    /// Set while a selected pair is being resolved.
    pub(super) input_locked: bool,
}

impl UiState for GameState {}

impl GameState {
    /// Idle state that will build its first run from `config`.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            run_config: config.clone(),
            config,
            ..Self::default()
        }
    }

    pub fn run(&self) -> RunId {
        self.run
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Move budget of the current run.
    pub fn min_moves(&self) -> u32 {
        self.run_config.min_moves
    }

    pub fn time_left(&self) -> u32 {
        self.clock.time_left()
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn run_config(&self) -> &SessionConfig {
        &self.run_config
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn input_locked(&self) -> bool {
        self.input_locked
    }

    pub fn all_solved(&self) -> bool {
        !self.board.is_empty() && self.selection.solved().len() == self.board.len()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            run: self.run,
            board: self.board.clone(),
            flipped: self.selection.flipped().to_vec(),
            solved: self.selection.solved().clone(),
            status: self.status,
            moves: self.moves,
            min_moves: self.min_moves(),
            time_left: self.time_left(),
            score: self.score,
            grid_size: self.run_config.grid_size,
            config: self.config.clone(),
            input_locked: self.input_locked,
        }
    }
}

/// Read-only copy of the state handed to presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub run: RunId,
    pub board: Board,
    pub flipped: Vec<TileId>,
    pub solved: BTreeSet<TileId>,
    pub status: RunStatus,
    pub moves: u32,
    pub min_moves: u32,
    pub time_left: u32,
    pub score: u32,
    /// Grid size the board was built for.
    pub grid_size: u8,
    /// Session config the next reset will use.
    pub config: SessionConfig,
    pub input_locked: bool,
}

impl GameSnapshot {
    pub fn is_face_up(&self, id: TileId) -> bool {
        self.flipped.contains(&id) || self.solved.contains(&id)
    }

    pub fn is_solved(&self, id: TileId) -> bool {
        self.solved.contains(&id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
