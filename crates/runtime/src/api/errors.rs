//! Unified error types surfaced by the runtime API.
//!
//! Wraps rule failures from `game-core`, content loading problems and worker
//! coordination failures so clients can bubble them up with consistent
//! context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ErrorSeverity, ExecuteError, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("command rejected: {0}")]
    Execute(#[from] ExecuteError),

    #[error("failed to load game content: {0:#}")]
    Content(anyhow::Error),

    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl RuntimeError {
    /// Returns the rule error when the command itself was rejected.
    pub fn as_execute(&self) -> Option<&ExecuteError> {
        match self {
            Self::Execute(err) => Some(err),
            _ => None,
        }
    }

    /// Rule errors keep their own severity; everything else is fatal for the session.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Execute(err) => err.severity(),
            _ => ErrorSeverity::Fatal,
        }
    }
}
