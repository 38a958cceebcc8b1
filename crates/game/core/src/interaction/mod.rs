//! Interaction resolvers.
//!
//! Each resolver looks at the current snapshot and one catalog entry and
//! decides what the player sees: a refusal, a plain message, an offer of
//! choices, or an immediate change followed by a message. Resolvers never
//! mutate; [`Resolution::into_state`] builds the next snapshot.
//!
//! Choice effects are interpreted later, against the snapshot current at
//! selection time, by [`apply_choice`].

mod effect;
mod inventory;
mod npc;
mod portal;
mod workstation;

pub use effect::apply_choice;
pub use inventory::InventoryInteraction;
pub use npc::NpcInteraction;
pub use portal::PortalInteraction;
pub use workstation::WorkstationInteraction;

use crate::engine::{DialogueController, DialogueError, ExecuteError};
use crate::env::GameEnv;
use crate::state::{Choice, GameState, LocationId, TaskId, TaskState, TimeOfDay};

/// Decides the outcome of one player interaction.
pub trait Interaction {
    /// Inspects `state` without mutating it.
    fn resolve(&self, state: &GameState, env: &GameEnv<'_>) -> Result<Resolution, ExecuteError>;
}

/// Messages and choices for the next dialogue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogueRequest {
    pub messages: Vec<String>,
    pub choices: Vec<Choice>,
}

impl DialogueRequest {
    pub fn message<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
            choices: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    /// Returns `state` with this dialogue opened.
    pub fn open_on(self, state: &GameState) -> Result<GameState, DialogueError> {
        let mut next = state.clone();
        next.dialogue = DialogueController::open(self.messages, self.choices)?;
        Ok(next)
    }
}

/// A state change applied together with its dialogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Immediate {
    Travel(LocationId),
    AssignTask(TaskId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Preconditions failed. Only a dialogue opens.
    Refused(DialogueRequest),
    /// Nothing to do besides showing information.
    Informed(DialogueRequest),
    /// A dialogue carrying choices bound to effects.
    Offered(DialogueRequest),
    Applied {
        dialogue: DialogueRequest,
        effect: Immediate,
    },
}

impl Resolution {
    pub fn dialogue(&self) -> &DialogueRequest {
        match self {
            Self::Refused(dialogue) | Self::Informed(dialogue) | Self::Offered(dialogue) => {
                dialogue
            }
            Self::Applied { dialogue, .. } => dialogue,
        }
    }

    pub fn is_refusal(&self) -> bool {
        matches!(self, Self::Refused(_))
    }

    /// Builds the snapshot produced by this resolution.
    pub fn into_state(self, state: &GameState) -> Result<GameState, DialogueError> {
        match self {
            Self::Refused(dialogue) | Self::Informed(dialogue) | Self::Offered(dialogue) => {
                dialogue.open_on(state)
            }
            Self::Applied { dialogue, effect } => {
                let mut next = state.clone();
                match effect {
                    Immediate::Travel(location) => next.location = location,
                    Immediate::AssignTask(task) => next.task = TaskState::assigned(task),
                }
                dialogue.open_on(&next)
            }
        }
    }
}

/// Closing line of every dialogue that follows a stat-changing activity.
pub(crate) fn time_passes(time: TimeOfDay) -> String {
    format!("Time passes... It's now {time}.")
}

pub(crate) fn join_times(times: &[TimeOfDay]) -> String {
    times
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
