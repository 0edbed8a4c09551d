//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use memory_match::game::{
    Board, GameEngine, GameHandle, GameMachine, IconSymbol, SessionConfig, ThemeRegistry, TileId,
};
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::task::JoinHandle;

pub const SEED: u64 = 0x5eed;

/// Session config on the built-in numbers theme.
pub fn config(grid_size: u8, min_moves: u32) -> SessionConfig {
    SessionConfig {
        grid_size,
        min_moves,
        theme: "numbers".to_string(),
    }
}

pub fn seeded_machine(config: SessionConfig) -> GameMachine {
    GameMachine::seeded(config, ThemeRegistry::builtin(), SEED).expect("valid config")
}

/// Board from literal values, ids in order.
pub fn board(values: &[&str]) -> Board {
    Board::from_values(values.iter().map(|value| IconSymbol::from(*value)))
}

/// Every matching pair on `board`, in order of first appearance.
pub fn pairs(board: &Board) -> Vec<(TileId, TileId)> {
    let mut open: HashMap<&str, TileId> = HashMap::new();
    let mut pairs = Vec::new();
    for tile in board.tiles() {
        match open.remove(tile.value.as_str()) {
            Some(first) => pairs.push((first, tile.id)),
            None => {
                open.insert(tile.value.as_str(), tile.id);
            }
        }
    }
    pairs
}

/// Two tiles with different values.
pub fn mismatch(board: &Board) -> (TileId, TileId) {
    let first = &board.tiles()[0];
    let second = board
        .tiles()
        .iter()
        .find(|tile| tile.value != first.value)
        .expect("board has at least two values");
    (first.id, second.id)
}

/// Spawns an engine on the current runtime and starts a run.
pub async fn start_engine(config: SessionConfig) -> (GameHandle, JoinHandle<()>) {
    let (handle, task) = GameEngine::spawn(seeded_machine(config.clone()));
    handle.reset(config).await.expect("reset accepted");
    (handle, task)
}

/// Create a temporary config file with `contents`.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}
