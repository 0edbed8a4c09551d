//! The owned game state machine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::deck::{self, Board, TileId};
use crate::game::effects::{Checkpoint, GameEffect};
use crate::game::error::GameError;
use crate::game::intent::GameIntent;
use crate::game::reducer::GameReducer;
use crate::game::session::{ConfigPatch, SessionConfig};
use crate::game::state::{GameSnapshot, GameState, RunId};
use crate::game::theme::ThemeRegistry;
use crate::mvi::{dispatch_mvi, Reducer};

/// One game session: the state, the themes it may use and the random source
/// boards are shuffled with.
///
/// Every operation returns the [`GameEffect`]s its transition implies; the
/// caller owns timers and feedback.
pub struct GameMachine<R = StdRng> {
    state: GameState,
    themes: ThemeRegistry,
    rng: R,
}

impl GameMachine<StdRng> {
    pub fn from_entropy(config: SessionConfig, themes: ThemeRegistry) -> Result<Self, GameError> {
        Self::new(config, themes, StdRng::from_entropy())
    }

    pub fn seeded(
        config: SessionConfig,
        themes: ThemeRegistry,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::new(config, themes, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameMachine<R> {
    /// Creates an idle machine. Nothing is built until the first reset.
    pub fn new(config: SessionConfig, themes: ThemeRegistry, rng: R) -> Result<Self, GameError> {
        config.validate(&themes)?;
        Ok(Self {
            state: GameState::new(config),
            themes,
            rng,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    /// Starts a new run from `config`, which also becomes the session config.
    pub fn reset(&mut self, config: SessionConfig) -> Result<Vec<GameEffect>, GameError> {
        config.validate(&self.themes)?;
        let theme = self.themes.get(&config.theme)?;
        let board = deck::build(config.grid_size, theme, &mut self.rng)?;
        Ok(self.start(config, board))
    }

    /// Starts a new run from the current session config.
    pub fn restart(&mut self) -> Result<Vec<GameEffect>, GameError> {
        self.reset(self.state.config().clone())
    }

    /// Starts a new run on a prepared board instead of a shuffled one.
    pub fn reset_with_board(
        &mut self,
        config: SessionConfig,
        board: Board,
    ) -> Result<Vec<GameEffect>, GameError> {
        config.validate(&self.themes)?;
        Ok(self.start(config, board))
    }

    pub fn select_tile(&mut self, id: TileId) -> Vec<GameEffect> {
        let first = self.state.selection().flipped().first().copied();
        let moves = self.state.moves();
        let effects = self.dispatch(GameIntent::SelectTile { id });
        if let Some(first) = first.filter(|_| self.state.moves() > moves) {
            tracing::debug!(
                run = %self.state.run(),
                first,
                second = id,
                matched = self.state.selection().is_solved(id),
                moves = self.state.moves(),
                status = ?self.state.status(),
                "Pair resolved"
            );
        }
        effects
    }

    /// Merges `patch` into the session config. The running board is untouched.
    pub fn set_config(&mut self, patch: &ConfigPatch) -> Result<(), GameError> {
        let config = self.state.config().merged(patch);
        config.validate(&self.themes)?;
        tracing::debug!(
            grid_size = config.grid_size,
            min_moves = config.min_moves,
            theme = %config.theme,
            "Session config updated"
        );
        self.dispatch(GameIntent::Configure { config });
        Ok(())
    }

    pub fn tick(&mut self, run: RunId) -> Vec<GameEffect> {
        self.dispatch(GameIntent::ClockTick { run })
    }

    pub fn mismatch_elapsed(&mut self, run: RunId) -> Vec<GameEffect> {
        self.dispatch(GameIntent::MismatchElapsed { run })
    }

    /// Ends the session, returning the cancellation for any live run.
    pub fn dispose(self) -> Vec<GameEffect> {
        if self.state.status().is_playing() {
            vec![GameEffect::CancelScheduled {
                run: self.state.run(),
            }]
        } else {
            Vec::new()
        }
    }

    fn start(&mut self, config: SessionConfig, board: Board) -> Vec<GameEffect> {
        let run = self.state.run().next();
        tracing::info!(
            %run,
            grid_size = config.grid_size,
            min_moves = config.min_moves,
            theme = %config.theme,
            tiles = board.len(),
            "Starting run"
        );
        self.dispatch(GameIntent::Start { run, config, board })
    }

    fn dispatch(&mut self, intent: GameIntent) -> Vec<GameEffect> {
        let before = Checkpoint::of(&self.state);
        dispatch_mvi!(self, state, GameReducer, intent);
        before.effects(&self.state)
    }
}
