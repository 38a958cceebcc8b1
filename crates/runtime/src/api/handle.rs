//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! executing game commands, reading the current snapshot or streaming events
//! from specific topics.
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{Command as GameCommand, ExecutionOutcome, GameState};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Result of a command that reached the engine without error.
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    pub outcome: ExecutionOutcome,
    /// Snapshot after the command (the unchanged one when ignored).
    pub snapshot: Arc<GameState>,
}

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Execute a game command against the session snapshot.
    ///
    /// Rule violations come back as [`RuntimeError::Execute`]; the snapshot is
    /// left untouched in that case.
    pub async fn execute(&self, command: GameCommand) -> Result<ExecutionReport> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Execute {
                command,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the current game state (read-only snapshot)
    pub async fn snapshot(&self) -> Result<Arc<GameState>> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - Snapshot replacements, ignored and failed commands
    /// - `Topic::Dialogue` - Reveal ticker start/stop
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut game_rx = handle.subscribe(Topic::GameState);
    /// while let Ok(event) = game_rx.recv().await {
    ///     // Re-render from handle.snapshot()
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub(crate) async fn request_shutdown(&self) {
        if self.command_tx.send(Command::Shutdown).await.is_err() {
            tracing::debug!("session worker already stopped");
        }
    }
}
