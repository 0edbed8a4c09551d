//! Command-line interface for memory-match.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Memory Match - flip tiles, find pairs, beat the clock
#[derive(Parser, Debug, Default)]
#[command(name = "memory-match")]
#[command(about = "Tile-matching memory game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Board side length (2-10)
    #[arg(long)]
    pub grid_size: Option<u8>,

    /// Move budget for a run
    #[arg(long)]
    pub min_moves: Option<u32>,

    /// Symbol set to draw tiles from
    #[arg(long)]
    pub theme: Option<String>,

    /// Seed for reproducible boards
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

impl Cli {
    /// Path of the config file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Overrides file values with the flags that were given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(grid_size) = self.grid_size {
            config.game.grid_size = grid_size;
        }
        if let Some(min_moves) = self.min_moves {
            config.game.min_moves = min_moves;
        }
        if let Some(theme) = &self.theme {
            config.game.theme = theme.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.display().to_string());
        }
    }
}
