//! Board generation.
//!
//! A board holds `2 * floor(grid_size² / 2)` tiles: on odd grids the last
//! cell stays empty. Themes shorter than the pair count are cycled, so large
//! grids on small themes end up with more than two tiles sharing a value.
//! That degraded uniqueness is accepted rather than rejected.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::game::error::GameError;
use crate::game::session::check_grid_size;
use crate::game::theme::{IconSymbol, Theme};

/// Position of a tile on the board, stable for the lifetime of a run.
pub type TileId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub id: TileId,
    pub value: IconSymbol,
}

/// Ordered tiles of one run. `tiles()[id].id == id` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Lays out `values` in order, numbering tiles from zero.
    pub fn from_values(values: impl IntoIterator<Item = IconSymbol>) -> Self {
        let tiles = values
            .into_iter()
            .enumerate()
            .map(|(id, value)| Tile { id, value })
            .collect();
        Self { tiles }
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, id: TileId) -> bool {
        id < self.tiles.len()
    }
}

/// Number of pairs a `grid_size` × `grid_size` board holds.
pub fn pair_count(grid_size: u8) -> usize {
    let cells = usize::from(grid_size) * usize::from(grid_size);
    cells / 2
}

/// Builds a shuffled board for `grid_size` from `theme`.
///
/// The shuffle is a uniform Fisher-Yates permutation drawn from `rng`, so a
/// seeded generator yields the same board every time.
pub fn build<R: Rng + ?Sized>(
    grid_size: u8,
    theme: &Theme,
    rng: &mut R,
) -> Result<Board, GameError> {
    check_grid_size(grid_size)?;
    if theme.is_empty() {
        return Err(GameError::EmptyTheme {
            name: theme.name().to_string(),
        });
    }

    let pairs = pair_count(grid_size);
    let selected: Vec<IconSymbol> = theme.symbols().iter().cycle().take(pairs).cloned().collect();

    let mut values: Vec<IconSymbol> = selected.iter().chain(selected.iter()).cloned().collect();
    values.shuffle(rng);

    Ok(Board::from_values(values))
}
