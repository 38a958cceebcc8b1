//! Dialogue finite-state machine.
//!
//! ```text
//! Closed ──open──▶ Revealing ──tick*/skip──▶ AwaitingAdvance ──advance──▶ Revealing | Closed
//!                                       └──▶ AwaitingChoice ──select──▶ (effect opens next dialogue)
//! ```
//!
//! Every operation is pure: it reads a [`DialogueState`] and returns a
//! [`DialogueStep`] describing what changed.

use crate::state::{Choice, ChoiceEffect, DialoguePhase, DialogueState};

use super::errors::DialogueError;

/// Result of feeding one input to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogueStep {
    /// The input has no meaning in the current phase (e.g. a late timer tick).
    Ignored,
    Updated(DialogueState),
    /// A choice was picked. The dialogue itself is left untouched.
    Selected(ChoiceEffect),
}

/// What the host should do with the reveal ticker after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerDirective {
    Start,
    Cancel,
    Keep,
}

pub struct DialogueController;

impl DialogueController {
    /// Opens a new dialogue, replacing whatever was shown before.
    pub fn open(messages: Vec<String>, choices: Vec<Choice>) -> Result<DialogueState, DialogueError> {
        if messages.is_empty() {
            return Err(DialogueError::EmptyDialogue);
        }
        let mut dialogue = DialogueState {
            phase: DialoguePhase::Revealing,
            messages,
            current_index: 0,
            revealed: 0,
            choices,
        };
        Self::settle_if_revealed(&mut dialogue);
        Ok(dialogue)
    }

    /// Reveals one more character of the current message.
    pub fn tick(dialogue: &DialogueState) -> DialogueStep {
        if dialogue.phase != DialoguePhase::Revealing {
            return DialogueStep::Ignored;
        }
        let mut next = dialogue.clone();
        next.revealed += 1;
        Self::settle_if_revealed(&mut next);
        DialogueStep::Updated(next)
    }

    /// Completes the reveal of the current message.
    pub fn skip(dialogue: &DialogueState) -> DialogueStep {
        if dialogue.phase != DialoguePhase::Revealing {
            return DialogueStep::Ignored;
        }
        let mut next = dialogue.clone();
        next.revealed = message_len(&next);
        Self::settle_if_revealed(&mut next);
        DialogueStep::Updated(next)
    }

    /// Moves past the current message, closing the dialogue after the last one.
    ///
    /// While revealing this acts as [`DialogueController::skip`]; while choices
    /// are shown it does nothing.
    pub fn advance(dialogue: &DialogueState) -> Result<DialogueStep, DialogueError> {
        match dialogue.phase {
            DialoguePhase::Closed => Err(DialogueError::invalid_state("advance", dialogue.phase)),
            DialoguePhase::Revealing => Ok(Self::skip(dialogue)),
            DialoguePhase::AwaitingChoice => Ok(DialogueStep::Ignored),
            DialoguePhase::AwaitingAdvance if dialogue.is_last_message() => {
                Ok(DialogueStep::Updated(DialogueState::closed()))
            }
            DialoguePhase::AwaitingAdvance => {
                let mut next = dialogue.clone();
                next.current_index += 1;
                next.revealed = 0;
                next.phase = DialoguePhase::Revealing;
                Self::settle_if_revealed(&mut next);
                Ok(DialogueStep::Updated(next))
            }
        }
    }

    /// Picks choice `index` of the current message.
    pub fn select_choice(
        dialogue: &DialogueState,
        index: usize,
    ) -> Result<DialogueStep, DialogueError> {
        if dialogue.phase != DialoguePhase::AwaitingChoice {
            return Ok(DialogueStep::Ignored);
        }
        dialogue
            .choices
            .get(index)
            .map(|choice| DialogueStep::Selected(choice.effect))
            .ok_or(DialogueError::ChoiceOutOfRange {
                index,
                len: dialogue.choices.len(),
            })
    }

    /// Derives the ticker directive from the phase before and after a command.
    pub fn timer(before: DialoguePhase, after: DialoguePhase) -> TimerDirective {
        let was = before == DialoguePhase::Revealing;
        let is = after == DialoguePhase::Revealing;
        match (was, is) {
            (false, true) => TimerDirective::Start,
            (true, false) => TimerDirective::Cancel,
            _ => TimerDirective::Keep,
        }
    }

    fn settle_if_revealed(dialogue: &mut DialogueState) {
        let len = message_len(dialogue);
        if dialogue.revealed < len {
            return;
        }
        dialogue.revealed = len;
        dialogue.phase = if !dialogue.choices.is_empty() {
            DialoguePhase::AwaitingChoice
        } else {
            DialoguePhase::AwaitingAdvance
        };
    }
}

fn message_len(dialogue: &DialogueState) -> usize {
    dialogue
        .messages
        .get(dialogue.current_index)
        .map(|message| message.chars().count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ItemId;

    fn lines(messages: &[&str]) -> Vec<String> {
        messages.iter().map(|m| m.to_string()).collect()
    }

    fn updated(step: DialogueStep) -> DialogueState {
        match step {
            DialogueStep::Updated(dialogue) => dialogue,
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn open_rejects_empty_message_list() {
        assert_eq!(
            DialogueController::open(Vec::new(), Vec::new()),
            Err(DialogueError::EmptyDialogue)
        );
    }

    #[test]
    fn tick_reveals_characters_not_bytes() {
        let mut dialogue = DialogueController::open(lines(&["☕ok"]), Vec::new()).unwrap();
        assert_eq!(dialogue.phase, DialoguePhase::Revealing);

        dialogue = updated(DialogueController::tick(&dialogue));
        assert_eq!(dialogue.visible_text(), "☕");
        dialogue = updated(DialogueController::tick(&dialogue));
        dialogue = updated(DialogueController::tick(&dialogue));
        assert_eq!(dialogue.visible_text(), "☕ok");
        assert_eq!(dialogue.phase, DialoguePhase::AwaitingAdvance);

        assert_eq!(DialogueController::tick(&dialogue), DialogueStep::Ignored);
    }

    #[test]
    fn empty_first_message_skips_reveal() {
        let dialogue = DialogueController::open(lines(&[""]), Vec::new()).unwrap();
        assert_eq!(dialogue.phase, DialoguePhase::AwaitingAdvance);
    }

    #[test]
    fn two_advances_after_reveals_close_the_dialogue() {
        let dialogue = DialogueController::open(lines(&["m0", "m1"]), Vec::new()).unwrap();
        let dialogue = updated(DialogueController::skip(&dialogue));
        let dialogue = updated(DialogueController::advance(&dialogue).unwrap());
        assert_eq!(dialogue.current_index, 1);
        assert_eq!(dialogue.phase, DialoguePhase::Revealing);

        let dialogue = updated(DialogueController::skip(&dialogue));
        let dialogue = updated(DialogueController::advance(&dialogue).unwrap());

        assert_eq!(dialogue.phase, DialoguePhase::Closed);
        assert_eq!(dialogue.current_index, 0);
        assert!(dialogue.messages.is_empty());
    }

    #[test]
    fn advance_while_revealing_behaves_as_skip() {
        let dialogue = DialogueController::open(lines(&["hello"]), Vec::new()).unwrap();
        let dialogue = updated(DialogueController::advance(&dialogue).unwrap());
        assert_eq!(dialogue.phase, DialoguePhase::AwaitingAdvance);
        assert_eq!(dialogue.visible_text(), "hello");
    }

    #[test]
    fn advance_when_closed_is_invalid() {
        assert!(matches!(
            DialogueController::advance(&DialogueState::closed()),
            Err(DialogueError::InvalidState { .. })
        ));
    }

    #[test]
    fn choices_are_offered_once_the_first_message_is_revealed() {
        let choices = vec![
            Choice::new("a", ChoiceEffect::Workout),
            Choice::new("b", ChoiceEffect::Purchase(ItemId::Coffee)),
        ];
        let dialogue = DialogueController::open(lines(&["first", "second"]), choices).unwrap();

        let dialogue = updated(DialogueController::skip(&dialogue));
        assert_eq!(dialogue.phase, DialoguePhase::AwaitingChoice);
        assert_eq!(dialogue.current_index, 0);
        assert_eq!(dialogue.current_choices().len(), 2);
        assert_eq!(
            DialogueController::advance(&dialogue).unwrap(),
            DialogueStep::Ignored
        );
        assert_eq!(
            DialogueController::select_choice(&dialogue, 0).unwrap(),
            DialogueStep::Selected(ChoiceEffect::Workout)
        );
    }

    #[test]
    fn dialogue_without_choices_waits_for_advance_on_every_message() {
        let dialogue = DialogueController::open(lines(&["first", "second"]), Vec::new()).unwrap();
        let dialogue = updated(DialogueController::skip(&dialogue));
        assert_eq!(dialogue.phase, DialoguePhase::AwaitingAdvance);
        let dialogue = updated(DialogueController::advance(&dialogue).unwrap());
        let dialogue = updated(DialogueController::skip(&dialogue));
        assert_eq!(dialogue.phase, DialoguePhase::AwaitingAdvance);
        assert!(dialogue.current_choices().is_empty());
    }

    #[test]
    fn select_choice_yields_bound_effect_only() {
        let choices = vec![
            Choice::new("a", ChoiceEffect::Workout),
            Choice::new("b", ChoiceEffect::Purchase(ItemId::Coffee)),
        ];
        let dialogue = DialogueController::open(lines(&["menu"]), choices).unwrap();
        let dialogue = updated(DialogueController::skip(&dialogue));

        assert_eq!(
            DialogueController::select_choice(&dialogue, 1).unwrap(),
            DialogueStep::Selected(ChoiceEffect::Purchase(ItemId::Coffee))
        );
        assert_eq!(dialogue.current_index, 0);
        assert_eq!(
            DialogueController::select_choice(&dialogue, 2),
            Err(DialogueError::ChoiceOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn select_outside_choice_phase_is_ignored() {
        let dialogue = DialogueController::open(lines(&["hi"]), Vec::new()).unwrap();
        assert_eq!(
            DialogueController::select_choice(&dialogue, 0).unwrap(),
            DialogueStep::Ignored
        );
    }

    #[test]
    fn timer_directive_follows_reveal_phase() {
        use DialoguePhase::*;
        assert_eq!(DialogueController::timer(Closed, Revealing), TimerDirective::Start);
        assert_eq!(DialogueController::timer(Revealing, AwaitingAdvance), TimerDirective::Cancel);
        assert_eq!(DialogueController::timer(Revealing, Revealing), TimerDirective::Keep);
        assert_eq!(DialogueController::timer(AwaitingChoice, Closed), TimerDirective::Keep);
    }
}
