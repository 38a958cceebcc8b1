use super::{DialogueRequest, Interaction, Resolution};
use crate::engine::ExecuteError;
use crate::env::GameEnv;
use crate::state::{Choice, ChoiceEffect, GameState};

/// Lists owned items, each as a "use" choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InventoryInteraction;

impl Interaction for InventoryInteraction {
    fn resolve(&self, state: &GameState, env: &GameEnv<'_>) -> Result<Resolution, ExecuteError> {
        if state.inventory.is_empty() {
            return Ok(Resolution::Informed(DialogueRequest::message([
                "Your inventory is empty!",
            ])));
        }

        let mut choices = Vec::with_capacity(state.inventory.used_slots());
        for (&item, &quantity) in &state.inventory.items {
            let definition = env.item(item)?;
            choices.push(Choice::new(
                format!("{} {} ({quantity}x)", definition.icon, definition.name),
                ChoiceEffect::UseItem(item),
            ));
        }

        Ok(Resolution::Offered(
            DialogueRequest::message(["Your Inventory:"]).with_choices(choices),
        ))
    }
}
