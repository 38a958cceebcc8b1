//! Routes each command to the component that handles it.

use crate::env::GameEnv;
use crate::interaction::{
    Interaction, InventoryInteraction, NpcInteraction, PortalInteraction, WorkstationInteraction,
    apply_choice,
};
use crate::state::GameState;

use super::dialogue::{DialogueController, DialogueStep};
use super::errors::ExecuteError;
use super::inventory::InventoryManager;
use super::Command;

/// Returns the next snapshot, or `None` when the command is ignored.
pub(super) fn execute_command(
    command: &Command,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<Option<GameState>, ExecuteError> {
    if command.is_interaction() && state.dialogue.is_open() {
        return Ok(None);
    }

    match *command {
        Command::InteractPortal(destination) => {
            interact(&PortalInteraction::new(destination), state, env)
        }
        Command::InteractNpc(npc) => interact(&NpcInteraction::new(npc), state, env),
        Command::InteractWorkstation => interact(&WorkstationInteraction, state, env),
        Command::OpenInventory => interact(&InventoryInteraction, state, env),
        Command::DialogueTick => step(DialogueController::tick(&state.dialogue), state, env),
        Command::DialogueSkip => step(DialogueController::skip(&state.dialogue), state, env),
        Command::DialogueAdvance => step(DialogueController::advance(&state.dialogue)?, state, env),
        Command::DialogueSelectChoice(index) => step(
            DialogueController::select_choice(&state.dialogue, index)?,
            state,
            env,
        ),
        Command::ConsumeItem(item) => {
            let definition = env.item(item)?;
            Ok(Some(InventoryManager::consume(state, definition)?))
        }
    }
}

fn interact<I: Interaction>(
    interaction: &I,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<Option<GameState>, ExecuteError> {
    let resolution = interaction.resolve(state, env)?;
    Ok(Some(resolution.into_state(state)?))
}

fn step(
    step: DialogueStep,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<Option<GameState>, ExecuteError> {
    match step {
        DialogueStep::Ignored => Ok(None),
        DialogueStep::Updated(dialogue) => {
            let mut next = state.clone();
            next.dialogue = dialogue;
            Ok(Some(next))
        }
        DialogueStep::Selected(effect) => apply_choice(effect, state, env).map(Some),
    }
}
