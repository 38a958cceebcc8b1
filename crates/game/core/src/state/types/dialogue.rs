//! Dialogue data held in the snapshot.
//!
//! Choices carry data-only effects so the whole dialogue stays inspectable
//! and serializable. Effects are interpreted by the engine when selected.

use crate::state::{EventId, ItemId};

/// Phase of the dialogue state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DialoguePhase {
    #[default]
    Closed,
    /// The current message is being revealed character by character.
    Revealing,
    /// Message fully shown, no choices attached.
    AwaitingAdvance,
    /// Message fully shown, choices attached.
    AwaitingChoice,
}

/// Command descriptor bound to a dialogue choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChoiceEffect {
    /// Attend a scrum event.
    JoinEvent(EventId),
    /// Buy an item at the cafe counter.
    Purchase(ItemId),
    /// Quick workout with the trainer.
    Workout,
    /// Tech chat at the bar.
    BarChat,
    /// Put a work session into the current task.
    WorkOnTask,
    /// Use (or inspect) an item from the inventory.
    UseItem(ItemId),
}

/// A selectable option.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    pub text: String,
    pub effect: ChoiceEffect,
}

impl Choice {
    pub fn new(text: impl Into<String>, effect: ChoiceEffect) -> Self {
        Self {
            text: text.into(),
            effect,
        }
    }
}

/// Dialogue box contents.
///
/// Invariant: `current_index < messages.len()` whenever the phase is not
/// [`DialoguePhase::Closed`]. Choices are offered as soon as the current
/// message is fully revealed, whichever message that is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueState {
    pub phase: DialoguePhase,
    pub messages: Vec<String>,
    pub current_index: usize,
    /// Number of characters of the current message revealed so far.
    pub revealed: usize,
    pub choices: Vec<Choice>,
}

impl DialogueState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.phase != DialoguePhase::Closed
    }

    pub fn current_message(&self) -> Option<&str> {
        if !self.is_open() {
            return None;
        }
        self.messages.get(self.current_index).map(String::as_str)
    }

    /// Portion of the current message visible to the player.
    pub fn visible_text(&self) -> &str {
        let Some(message) = self.current_message() else {
            return "";
        };
        match message.char_indices().nth(self.revealed) {
            Some((byte, _)) => &message[..byte],
            None => message,
        }
    }

    pub fn is_last_message(&self) -> bool {
        self.current_index + 1 >= self.messages.len()
    }

    /// Choices shown under the current message.
    pub fn current_choices(&self) -> &[Choice] {
        if self.is_open() {
            &self.choices
        } else {
            &[]
        }
    }
}
