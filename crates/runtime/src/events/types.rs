//! Event types for different topics.

use game_core::{Command, DialoguePhase};
use serde::{Deserialize, Serialize};

/// Events related to snapshot changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// A command replaced the session snapshot.
    StateReplaced {
        version: u64,
        command: Command,
        phase: DialoguePhase,
    },

    /// A command was valid but had nothing to do in the current state.
    CommandIgnored { command: Command },

    /// A command was rejected and the snapshot left untouched.
    CommandFailed {
        command: Command,
        code: String,
        error: String,
    },
}

/// Events emitted by the reveal ticker lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DialogueEvent {
    RevealStarted { cadence_ms: u64 },
    RevealStopped,
}
