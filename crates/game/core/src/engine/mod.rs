//! Command interpreter.
//!
//! The [`GameEngine`] is the authoritative reducer for the session
//! [`StateStore`]. Every external command is routed through the dialogue
//! controller, an interaction resolver or the choice interpreter, and the
//! store is replaced exactly once when the command succeeds. A failed
//! command leaves the stored snapshot untouched.

mod dialogue;
mod dispatch;
mod errors;
mod inventory;
mod transition;

pub use dialogue::{DialogueController, DialogueStep, TimerDirective};
pub use errors::{DialogueError, ExecuteError, InteractionError};
pub use inventory::InventoryManager;
pub use transition::{StatDelta, TransitionEngine};

use crate::env::GameEnv;
use crate::state::{ItemId, LocationId, NpcId};
use crate::store::StateStore;

/// Discrete input forwarded by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    InteractPortal(LocationId),
    InteractNpc(NpcId),
    InteractWorkstation,
    OpenInventory,
    DialogueTick,
    DialogueSkip,
    DialogueAdvance,
    DialogueSelectChoice(usize),
    ConsumeItem(ItemId),
}

impl Command {
    /// Interaction triggers start a new dialogue and are ignored while one is open.
    pub fn is_interaction(&self) -> bool {
        matches!(
            self,
            Self::InteractPortal(_)
                | Self::InteractNpc(_)
                | Self::InteractWorkstation
                | Self::OpenInventory
        )
    }
}

/// Whether a command changed the snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Disposition {
    Applied { version: u64 },
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    pub disposition: Disposition,
    pub timer: TimerDirective,
}

impl ExecutionOutcome {
    pub const IGNORED: Self = Self {
        disposition: Disposition::Ignored,
        timer: TimerDirective::Keep,
    };

    pub fn is_applied(&self) -> bool {
        matches!(self.disposition, Disposition::Applied { .. })
    }
}

/// Game engine bound to one session store.
pub struct GameEngine<'a> {
    store: &'a mut StateStore,
}

impl<'a> GameEngine<'a> {
    pub fn new(store: &'a mut StateStore) -> Self {
        Self { store }
    }

    /// Executes one command against the current snapshot.
    ///
    /// On success the nonce is incremented and the snapshot replaced; the
    /// returned timer directive tells the host whether to start or cancel the
    /// reveal ticker.
    pub fn execute(
        &mut self,
        env: &GameEnv<'_>,
        command: &Command,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let current = self.store.snapshot();

        let Some(mut next) = dispatch::execute_command(command, &current, env)? else {
            return Ok(ExecutionOutcome::IGNORED);
        };
        next.nonce = current.nonce + 1;

        let timer = DialogueController::timer(current.dialogue.phase, next.dialogue.phase);
        let version = self.store.replace(next);

        Ok(ExecutionOutcome {
            disposition: Disposition::Applied { version },
            timer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CatalogSnapshot, PcgRng};
    use crate::error::GameError;
    use crate::state::{DialoguePhase, GameState, Meter};
    use crate::test_utils::catalog;

    fn run(
        store: &mut StateStore,
        catalog: &CatalogSnapshot,
        command: Command,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let env = GameEnv::from_catalog(catalog, &PcgRng);
        GameEngine::new(store).execute(&env, &command)
    }

    fn close_dialogue(store: &mut StateStore, catalog: &CatalogSnapshot) {
        while store.current().dialogue.is_open()
            && store.current().dialogue.phase != DialoguePhase::AwaitingChoice
        {
            run(store, catalog, Command::DialogueAdvance).unwrap();
        }
    }

    #[test]
    fn interaction_starts_ticker_and_bumps_nonce() {
        let catalog = catalog();
        let mut store = StateStore::default();

        let outcome = run(&mut store, &catalog, Command::InteractPortal(LocationId::Office)).unwrap();

        assert_eq!(outcome.disposition, Disposition::Applied { version: 1 });
        assert_eq!(outcome.timer, TimerDirective::Start);
        assert_eq!(store.current().nonce, 1);
        assert_eq!(store.current().location, LocationId::Office);
    }

    #[test]
    fn interactions_are_ignored_while_dialogue_is_open() {
        let catalog = catalog();
        let mut store = StateStore::default();
        run(&mut store, &catalog, Command::InteractPortal(LocationId::Office)).unwrap();
        let before = store.snapshot();

        let outcome = run(&mut store, &catalog, Command::InteractPortal(LocationId::Gym)).unwrap();

        assert_eq!(outcome, ExecutionOutcome::IGNORED);
        assert_eq!(*store.current(), *before);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn skip_cancels_ticker_and_late_tick_is_ignored() {
        let catalog = catalog();
        let mut store = StateStore::default();
        run(&mut store, &catalog, Command::OpenInventory).unwrap();

        let outcome = run(&mut store, &catalog, Command::DialogueSkip).unwrap();
        assert_eq!(outcome.timer, TimerDirective::Cancel);
        assert_eq!(store.current().dialogue.phase, DialoguePhase::AwaitingAdvance);

        let late = run(&mut store, &catalog, Command::DialogueTick).unwrap();
        assert_eq!(late, ExecutionOutcome::IGNORED);
    }

    #[test]
    fn failed_command_leaves_store_untouched() {
        let catalog = catalog();
        let mut store = StateStore::default();
        let before = store.snapshot();

        let err = run(&mut store, &catalog, Command::DialogueAdvance).unwrap_err();
        assert!(matches!(err, ExecuteError::Dialogue(DialogueError::InvalidState { .. })));

        let err = run(&mut store, &catalog, Command::ConsumeItem(ItemId::Coffee)).unwrap_err();
        assert_eq!(err.error_code(), "STATE_ITEM_NOT_OWNED");

        assert_eq!(*store.current(), *before);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn choice_out_of_range_is_rejected() {
        let catalog = catalog();
        let mut store = StateStore::default();
        run(&mut store, &catalog, Command::InteractPortal(LocationId::Cafe)).unwrap();
        close_dialogue(&mut store, &catalog);
        run(&mut store, &catalog, Command::InteractNpc(NpcId::Barista)).unwrap();
        run(&mut store, &catalog, Command::DialogueSkip).unwrap();
        let before = store.snapshot();

        let err = run(&mut store, &catalog, Command::DialogueSelectChoice(5)).unwrap_err();
        assert_eq!(
            err,
            ExecuteError::Dialogue(DialogueError::ChoiceOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(*store.current(), *before);
    }

    #[test]
    fn task_flow_from_assignment_to_completion() {
        let catalog = catalog();
        let mut store = StateStore::new(GameState::with_seed(&Default::default(), 7));

        run(&mut store, &catalog, Command::InteractPortal(LocationId::Office)).unwrap();
        close_dialogue(&mut store, &catalog);

        run(&mut store, &catalog, Command::InteractNpc(NpcId::ProductOwner)).unwrap();
        let assigned = store.current().task.current.unwrap();
        close_dialogue(&mut store, &catalog);

        for _ in 0..4 {
            run(&mut store, &catalog, Command::InteractWorkstation).unwrap();
            run(&mut store, &catalog, Command::DialogueSkip).unwrap();
            assert_eq!(store.current().dialogue.phase, DialoguePhase::AwaitingChoice);
            run(&mut store, &catalog, Command::DialogueSelectChoice(0)).unwrap();
            close_dialogue(&mut store, &catalog);
        }

        let state = store.current();
        assert!(state.task.current.is_none());
        assert_eq!(state.task.progress, 100);
        assert!(state.is_task_completed(assigned));
        assert_eq!(state.completed_tasks.len(), 1);
    }

    #[test]
    fn consume_item_applies_effect_without_time() {
        let catalog = catalog();
        let mut initial = GameState::default();
        initial.inventory.items.insert(ItemId::HealthySnack, 2);
        initial.vitals.health = Meter::new(70);
        let mut store = StateStore::new(initial);

        run(&mut store, &catalog, Command::ConsumeItem(ItemId::HealthySnack)).unwrap();

        let state = store.current();
        assert_eq!(state.vitals.health.value(), 90);
        assert_eq!(state.inventory.quantity(ItemId::HealthySnack), 1);
        assert_eq!(state.clock, GameState::default().clock);
        assert!(!state.dialogue.is_open());
    }
}
