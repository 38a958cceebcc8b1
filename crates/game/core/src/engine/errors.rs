//! Error types surfaced by the engine.

use crate::env::OracleError;
use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::{DialoguePhase, NpcId, StateError};

/// Misuse of the dialogue state machine by the host.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DialogueError {
    /// The command is not meaningful in the current phase.
    #[error("dialogue command '{command}' is invalid while {phase}")]
    InvalidState {
        command: String,
        phase: DialoguePhase,
    },

    #[error("choice index {index} out of range (choices: {len})")]
    ChoiceOutOfRange { index: usize, len: usize },

    #[error("cannot open a dialogue without messages")]
    EmptyDialogue,
}

impl DialogueError {
    pub(crate) fn invalid_state(command: &str, phase: DialoguePhase) -> Self {
        Self::InvalidState {
            command: command.to_owned(),
            phase,
        }
    }
}

impl GameError for DialogueError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidState { .. } | Self::ChoiceOutOfRange { .. } => ErrorSeverity::Validation,
            Self::EmptyDialogue => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidState { .. } => "DIALOGUE_INVALID_STATE",
            Self::ChoiceOutOfRange { .. } => "DIALOGUE_CHOICE_OUT_OF_RANGE",
            Self::EmptyDialogue => "DIALOGUE_EMPTY",
        }
    }
}

/// Interaction requests that cannot come from a consistent presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionError {
    /// The NPC is not rendered at the player's location.
    #[error("npc {npc} is not present here")]
    NpcNotPresent {
        npc: NpcId,
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },
}

impl GameError for InteractionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::NpcNotPresent { context, .. } => Some(context),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NpcNotPresent { .. } => "INTERACTION_NPC_NOT_PRESENT",
        }
    }
}

/// Errors surfaced while executing a command through the game engine.
///
/// A failed command never replaces the stored snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("dialogue command failed: {0}")]
    Dialogue(#[from] DialogueError),

    #[error("state update failed: {0}")]
    State(#[from] StateError),

    #[error("catalog lookup failed: {0}")]
    Oracle(#[from] OracleError),

    #[error("interaction failed: {0}")]
    Interaction(#[from] InteractionError),
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Dialogue(error) => error.severity(),
            Self::State(error) => error.severity(),
            Self::Oracle(error) => error.severity(),
            Self::Interaction(error) => error.severity(),
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Interaction(error) => error.context(),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Dialogue(error) => error.error_code(),
            Self::State(error) => error.error_code(),
            Self::Oracle(error) => error.error_code(),
            Self::Interaction(error) => error.error_code(),
        }
    }
}
