//! Single-actor engine around a [`GameMachine`].
//!
//! User commands and timer events share one actor loop, so a clock tick can
//! never interleave with a selection. Deferred work (the next clock tick, the
//! end of a mismatch pause) runs as tokio tasks that sleep and then report
//! back; their handles are aborted whenever the run they belong to is reset
//! or finished, and the run id they carry filters anything already queued.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;
use thiserror::Error;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::game::deck::TileId;
use crate::game::effects::{GameEffect, GameNotification};
use crate::game::error::GameError;
use crate::game::machine::GameMachine;
use crate::game::session::{ConfigPatch, SessionConfig};
use crate::game::state::{GameSnapshot, RunId};

const COMMAND_BUFFER: usize = 64;
const NOTIFICATION_BUFFER: usize = 64;
const REPLY_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Game engine channel disconnected")]
    Disconnected,

    #[error("Game engine did not reply in time")]
    Timeout,

    #[error("Game engine queue is full")]
    Busy,

    #[error(transparent)]
    Game(#[from] GameError),
}

enum EngineCommand {
    Reset {
        /// `None` restarts with the session config.
        config: Option<SessionConfig>,
        respond_to: Option<oneshot::Sender<Result<RunId, GameError>>>,
    },
    SelectTile {
        id: TileId,
    },
    SetConfig {
        patch: ConfigPatch,
        respond_to: Option<oneshot::Sender<Result<(), GameError>>>,
    },
    Snapshot {
        respond_to: oneshot::Sender<GameSnapshot>,
    },
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Tick,
    MismatchClear,
}

#[derive(Debug)]
struct TimerEvent {
    run: RunId,
    kind: TimerKind,
}

/// Pending deferred work, at most one task per kind.
struct ScheduledTasks {
    tick: Option<(RunId, JoinHandle<()>)>,
    mismatch: Option<(RunId, JoinHandle<()>)>,
    sender: mpsc::UnboundedSender<TimerEvent>,
}

impl ScheduledTasks {
    fn new(sender: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            tick: None,
            mismatch: None,
            sender,
        }
    }

    fn schedule(&mut self, kind: TimerKind, run: RunId, after: Duration) {
        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if sender.send(TimerEvent { run, kind }).is_err() {
                tracing::trace!(?kind, %run, "Timer fired after engine stopped");
            }
        });

        let slot = match kind {
            TimerKind::Tick => &mut self.tick,
            TimerKind::MismatchClear => &mut self.mismatch,
        };
        if let Some((_, previous)) = slot.replace((run, handle)) {
            previous.abort();
        }
    }

    fn cancel(&mut self, run: RunId) {
        for slot in [&mut self.tick, &mut self.mismatch] {
            if slot.as_ref().is_some_and(|(owner, _)| *owner == run) {
                if let Some((_, handle)) = slot.take() {
                    handle.abort();
                }
            }
        }
    }

    fn cancel_all(&mut self) {
        for slot in [&mut self.tick, &mut self.mismatch] {
            if let Some((_, handle)) = slot.take() {
                handle.abort();
            }
        }
    }
}

impl Drop for ScheduledTasks {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Owns the machine and runs the actor loop. Create with [`GameEngine::new`]
/// or [`GameEngine::spawn`]; talk to it through the returned [`GameHandle`].
pub struct GameEngine<R = StdRng> {
    machine: GameMachine<R>,
    commands: mpsc::Receiver<EngineCommand>,
    timers: mpsc::UnboundedReceiver<TimerEvent>,
    tasks: ScheduledTasks,
    snapshots: watch::Sender<GameSnapshot>,
    notifications: broadcast::Sender<GameNotification>,
}

impl<R: Rng + Send + 'static> GameEngine<R> {
    pub fn new(machine: GameMachine<R>) -> (GameHandle, Self) {
        let (command_tx, commands) = mpsc::channel(COMMAND_BUFFER);
        let (timer_tx, timers) = mpsc::unbounded_channel();
        let (snapshots, snapshot_rx) = watch::channel(machine.snapshot());
        let (notifications, _) = broadcast::channel(NOTIFICATION_BUFFER);

        let handle = GameHandle {
            sender: command_tx,
            snapshots: snapshot_rx,
            notifications: notifications.clone(),
        };
        let engine = Self {
            machine,
            commands,
            timers,
            tasks: ScheduledTasks::new(timer_tx),
            snapshots,
            notifications,
        };
        (handle, engine)
    }

    /// Spawns the actor loop on the current tokio runtime.
    pub fn spawn(machine: GameMachine<R>) -> (GameHandle, JoinHandle<()>) {
        let (handle, engine) = Self::new(machine);
        let task = tokio::spawn(engine.run());
        (handle, task)
    }

    /// Processes commands and timer events until shutdown or until every
    /// handle is dropped. Pending tasks are aborted on the way out.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(EngineCommand::Shutdown) | None => break,
                    Some(command) => self.handle_command(command),
                },
                Some(event) = self.timers.recv() => self.handle_timer(event),
            }
            self.publish();
        }

        let GameEngine {
            machine, mut tasks, ..
        } = self;
        for effect in machine.dispose() {
            if let GameEffect::CancelScheduled { run } = effect {
                tasks.cancel(run);
            }
        }
        tasks.cancel_all();
        tracing::debug!("Game engine stopped");
    }

    fn handle_command(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::Reset { config, respond_to } => {
                let outcome = match config {
                    Some(config) => self.machine.reset(config),
                    None => self.machine.restart(),
                };
                let result = match outcome {
                    Ok(effects) => {
                        self.apply(effects);
                        Ok(self.machine.state().run())
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Reset rejected");
                        Err(err)
                    }
                };
                if let Some(respond_to) = respond_to {
                    if respond_to.send(result).is_err() {
                        tracing::trace!("Engine: Reset response dropped (receiver gone)");
                    }
                }
            }
            EngineCommand::SelectTile { id } => {
                let effects = self.machine.select_tile(id);
                self.apply(effects);
            }
            EngineCommand::SetConfig { patch, respond_to } => {
                let result = self.machine.set_config(&patch);
                if let Err(err) = &result {
                    tracing::warn!(error = %err, "Config change rejected");
                }
                if let Some(respond_to) = respond_to {
                    if respond_to.send(result).is_err() {
                        tracing::trace!("Engine: SetConfig response dropped (receiver gone)");
                    }
                }
            }
            EngineCommand::Snapshot { respond_to } => {
                if respond_to.send(self.machine.snapshot()).is_err() {
                    tracing::trace!("Engine: Snapshot response dropped (receiver gone)");
                }
            }
            // Handled by the loop.
            EngineCommand::Shutdown => {}
        }
    }

    fn handle_timer(&mut self, event: TimerEvent) {
        if event.run != self.machine.state().run() {
            tracing::trace!(kind = ?event.kind, run = %event.run, "Discarding stale timer");
            return;
        }
        let effects = match event.kind {
            TimerKind::Tick => self.machine.tick(event.run),
            TimerKind::MismatchClear => self.machine.mismatch_elapsed(event.run),
        };
        self.apply(effects);
    }

    fn apply(&mut self, effects: Vec<GameEffect>) {
        for effect in effects {
            match effect {
                GameEffect::CancelScheduled { run } => self.tasks.cancel(run),
                GameEffect::ScheduleTick { run, after } => {
                    self.tasks.schedule(TimerKind::Tick, run, after)
                }
                GameEffect::ScheduleMismatchClear { run, after } => {
                    self.tasks.schedule(TimerKind::MismatchClear, run, after)
                }
                GameEffect::Notify(notification) => self.notify(notification),
            }
        }
    }

    fn notify(&self, notification: GameNotification) {
        match notification {
            GameNotification::Flip { id } => tracing::trace!(id, "Tile flipped"),
            GameNotification::Win { score } => {
                tracing::info!(run = %self.machine.state().run(), score, "Run won")
            }
            GameNotification::Lose { reason } => {
                tracing::info!(run = %self.machine.state().run(), ?reason, "Run lost")
            }
        }
        if !matches!(notification, GameNotification::Flip { .. }) {
            match self.machine.snapshot().to_json() {
                Ok(json) => tracing::debug!(snapshot = %json, "Final run state"),
                Err(err) => tracing::debug!(error = %err, "Could not serialize final state"),
            }
        }
        if self.notifications.send(notification).is_err() {
            tracing::trace!("Engine: notification dropped (no listeners)");
        }
    }

    fn publish(&self) {
        let snapshot = self.machine.snapshot();
        self.snapshots.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        });
    }
}

/// Cloneable handle to a running [`GameEngine`].
///
/// The async methods wait until the command is queued (and, for replies,
/// answered); the `try_*` variants never block and suit a synchronous UI.
#[derive(Clone)]
pub struct GameHandle {
    sender: mpsc::Sender<EngineCommand>,
    snapshots: watch::Receiver<GameSnapshot>,
    notifications: broadcast::Sender<GameNotification>,
}

impl GameHandle {
    /// Starts a new run from `config`, returning its id.
    pub async fn reset(&self, config: SessionConfig) -> Result<RunId, EngineError> {
        self.request_reset(Some(config)).await
    }

    /// Starts a new run from the session config.
    pub async fn restart(&self) -> Result<RunId, EngineError> {
        self.request_reset(None).await
    }

    pub async fn select_tile(&self, id: TileId) -> Result<(), EngineError> {
        self.enqueue(EngineCommand::SelectTile { id }).await
    }

    pub async fn set_config(&self, patch: ConfigPatch) -> Result<(), EngineError> {
        let (respond_to, receiver) = oneshot::channel();
        self.enqueue(EngineCommand::SetConfig {
            patch,
            respond_to: Some(respond_to),
        })
        .await?;
        Ok(recv_with_timeout(receiver).await??)
    }

    /// Snapshot taken after every previously queued command was processed.
    pub async fn snapshot(&self) -> Result<GameSnapshot, EngineError> {
        let (respond_to, receiver) = oneshot::channel();
        self.enqueue(EngineCommand::Snapshot { respond_to }).await?;
        recv_with_timeout(receiver).await
    }

    pub async fn shutdown(&self) -> Result<(), EngineError> {
        self.enqueue(EngineCommand::Shutdown).await
    }

    pub fn try_select_tile(&self, id: TileId) -> Result<(), EngineError> {
        self.try_enqueue(EngineCommand::SelectTile { id })
    }

    pub fn try_restart(&self) -> Result<(), EngineError> {
        self.try_enqueue(EngineCommand::Reset {
            config: None,
            respond_to: None,
        })
    }

    pub fn try_set_config(&self, patch: ConfigPatch) -> Result<(), EngineError> {
        self.try_enqueue(EngineCommand::SetConfig {
            patch,
            respond_to: None,
        })
    }

    /// Most recently published snapshot.
    pub fn latest(&self) -> GameSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshots.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GameNotification> {
        self.notifications.subscribe()
    }

    async fn request_reset(&self, config: Option<SessionConfig>) -> Result<RunId, EngineError> {
        let (respond_to, receiver) = oneshot::channel();
        self.enqueue(EngineCommand::Reset {
            config,
            respond_to: Some(respond_to),
        })
        .await?;
        Ok(recv_with_timeout(receiver).await??)
    }

    async fn enqueue(&self, command: EngineCommand) -> Result<(), EngineError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| EngineError::Disconnected)
    }

    fn try_enqueue(&self, command: EngineCommand) -> Result<(), EngineError> {
        self.sender.try_send(command).map_err(|err| match err {
            TrySendError::Full(_) => EngineError::Busy,
            TrySendError::Closed(_) => EngineError::Disconnected,
        })
    }
}

async fn recv_with_timeout<T>(receiver: oneshot::Receiver<T>) -> Result<T, EngineError> {
    match tokio::time::timeout(REPLY_TIMEOUT, receiver).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(EngineError::Disconnected),
        Err(_) => Err(EngineError::Timeout),
    }
}
