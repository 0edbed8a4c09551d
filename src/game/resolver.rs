//! Pair resolution.

use std::time::Duration;

use crate::game::deck::{Board, TileId};
use crate::game::state::Selection;

/// How long a mismatched pair stays face-up before it is turned back.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub first: TileId,
    pub second: TileId,
    pub matched: bool,
}

/// Compares the values of two tiles. Unknown ids never match.
pub fn resolve(board: &Board, first: TileId, second: TileId) -> Resolution {
    let matched = match (board.get(first), board.get(second)) {
        (Some(a), Some(b)) => first != second && a.value == b.value,
        _ => false,
    };
    Resolution {
        first,
        second,
        matched,
    }
}

impl Resolution {
    /// Moves a matched pair into `solved`. A mismatch leaves both tiles
    /// flipped; they are cleared once [`MISMATCH_DELAY`] has passed.
    ///
    /// Returns whether input may be re-enabled right away.
    pub fn apply(self, selection: &mut Selection) -> bool {
        if self.matched {
            selection.mark_solved(self.first, self.second);
        }
        self.matched
    }
}
