//! Intents accepted by the game reducer.

use crate::game::deck::{Board, TileId};
use crate::game::session::SessionConfig;
use crate::game::state::RunId;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GameIntent {
    /// Begin run `run` on a freshly built board.
    Start {
        run: RunId,
        config: SessionConfig,
        board: Board,
    },

    /// Player picked a tile.
    SelectTile { id: TileId },

    /// Replace the session config used by the next reset. Already validated.
    Configure { config: SessionConfig },

    /// One clock interval elapsed for `run`.
    ClockTick { run: RunId },

    /// The mismatch pause scheduled for `run` is over.
    MismatchElapsed { run: RunId },
}

impl Intent for GameIntent {}
