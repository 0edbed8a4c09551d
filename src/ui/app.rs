use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::config::ConfigStore;
use crate::game::{EngineError, GameHandle, GameNotification, GameSnapshot, TileId};
use crate::mvi::{dispatch_mvi, Reducer};
use crate::ui::settings::{SettingsDialogState, SettingsIntent, SettingsReducer};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// Presentation state of the terminal client.
///
/// The game itself lives in the engine; the app only mirrors its latest
/// snapshot and forwards player input as commands.
pub struct App {
    should_quit: bool,
    engine: GameHandle,
    config: ConfigStore,
    theme_names: Vec<String>,
    snapshot: GameSnapshot,
    notifications: broadcast::Receiver<GameNotification>,
    cursor: TileId,
    /// State of the settings dialog (MVI pattern).
    settings_dialog: SettingsDialogState,
    dark_mode: bool,
    bell_enabled: bool,
    pending_bell: bool,
    last_error: Option<String>,
}

impl App {
    pub fn new(engine: GameHandle, config: ConfigStore, theme_names: Vec<String>) -> Self {
        let ui = config.get().ui;
        Self {
            should_quit: false,
            snapshot: engine.latest(),
            notifications: engine.subscribe(),
            engine,
            config,
            theme_names,
            cursor: 0,
            settings_dialog: SettingsDialogState::default(),
            dark_mode: ui.dark_mode,
            bell_enabled: ui.bell,
            pending_bell: false,
            last_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn cursor(&self) -> TileId {
        self.cursor
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn settings_dialog(&self) -> &SettingsDialogState {
        &self.settings_dialog
    }

    /// Pull the latest snapshot and drain pending notifications.
    pub fn on_tick(&mut self) {
        self.snapshot = self.engine.latest();
        self.clamp_cursor();
        self.sync_game_settings();

        loop {
            match self.notifications.try_recv() {
                Ok(notification) => self.on_notification(notification),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "UI lagged behind game notifications");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }

    fn on_notification(&mut self, notification: GameNotification) {
        match notification {
            GameNotification::Flip { .. } => {}
            GameNotification::Win { .. } | GameNotification::Lose { .. } => {
                if self.bell_enabled {
                    self.pending_bell = true;
                }
            }
        }
    }

    /// Returns true once per finished run when the bell should ring.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.pending_bell)
    }

    pub fn move_cursor(&mut self, direction: CursorMove) {
        let len = self.snapshot.board.len();
        if len == 0 {
            return;
        }
        let columns = usize::from(self.snapshot.grid_size).max(1);
        let column = self.cursor % columns;
        let next = match direction {
            CursorMove::Left => (column > 0).then(|| self.cursor - 1),
            CursorMove::Right => (column + 1 < columns).then(|| self.cursor + 1),
            CursorMove::Up => self.cursor.checked_sub(columns),
            CursorMove::Down => Some(self.cursor + columns),
        };
        if let Some(next) = next.filter(|next| *next < len) {
            self.cursor = next;
        }
    }

    pub fn flip_at_cursor(&mut self) {
        let result = self.engine.try_select_tile(self.cursor);
        self.record(result);
    }

    pub fn restart(&mut self) {
        let result = self.engine.try_restart();
        self.record(result);
        self.cursor = 0;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        let dark_mode = self.dark_mode;
        self.config.update(|config| config.ui.dark_mode = dark_mode);
    }

    pub fn open_settings(&mut self) {
        self.dispatch_settings(SettingsIntent::Load {
            config: self.snapshot.config.clone(),
            themes: self.theme_names.clone(),
        });
    }

    pub fn dispatch_settings(&mut self, intent: SettingsIntent) {
        dispatch_mvi!(self, settings_dialog, SettingsReducer, intent);
    }

    /// Send the edited settings to the engine and start a run with them.
    ///
    /// The stored settings change only once a snapshot shows the engine
    /// accepted them.
    pub fn apply_settings(&mut self) {
        if let Some(patch) = self.settings_dialog.patch() {
            let result = self.engine.try_set_config(patch);
            self.record(result);
            self.restart();
        }
        self.dispatch_settings(SettingsIntent::Close);
    }

    fn sync_game_settings(&self) {
        let session = &self.snapshot.config;
        if self.config.get().session_config() == *session {
            return;
        }
        tracing::debug!(
            grid_size = session.grid_size,
            min_moves = session.min_moves,
            theme = %session.theme,
            "Storing accepted game settings"
        );
        self.config.update(|config| {
            config.game.grid_size = session.grid_size;
            config.game.min_moves = session.min_moves;
            config.game.theme = session.theme.clone();
        });
    }

    fn clamp_cursor(&mut self) {
        let len = self.snapshot.board.len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    fn record(&mut self, result: Result<(), EngineError>) {
        match result {
            Ok(()) => self.last_error = None,
            Err(err) => {
                tracing::warn!(error = %err, "Engine command failed");
                self.last_error = Some(err.to_string());
            }
        }
    }
}
