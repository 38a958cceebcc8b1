//! Item bookkeeping on the snapshot.

use crate::env::ItemDefinition;
use crate::state::{GameState, ItemId, StateError};

/// Adds and consumes items against the slot cap.
///
/// Consumption applies the item effect directly: no time passes and no
/// experience is granted.
pub struct InventoryManager;

impl InventoryManager {
    /// Adds `quantity` units of `item`.
    ///
    /// Fails with [`StateError::InventoryFull`] when `item` is new and every
    /// slot is taken.
    pub fn add(state: &GameState, item: ItemId, quantity: u32) -> Result<GameState, StateError> {
        if quantity == 0 {
            return Err(StateError::InvalidQuantity { item, quantity });
        }
        let inventory = &state.inventory;
        if inventory.quantity(item) == 0 && inventory.is_full() {
            return Err(StateError::InventoryFull {
                max_slots: inventory.max_slots,
            });
        }

        let mut next = state.clone();
        let held = next.inventory.items.entry(item).or_insert(0);
        *held = held.saturating_add(quantity);
        Ok(next)
    }

    /// Uses one unit of the item described by `definition`.
    pub fn consume(
        state: &GameState,
        definition: &ItemDefinition,
    ) -> Result<GameState, StateError> {
        let item = definition.id;
        let held = state.inventory.quantity(item);
        if held == 0 {
            return Err(StateError::ItemNotOwned(item));
        }

        let mut next = state.clone();
        if held == 1 {
            next.inventory.items.remove(&item);
        } else {
            next.inventory.items.insert(item, held - 1);
        }

        if let Some(effect) = definition.consumable_effect() {
            let vitals = &mut next.vitals;
            vitals.health = vitals.health.offset(effect.health);
            vitals.energy = vitals.energy.offset(effect.energy);
            vitals.awareness = vitals.awareness.offset(effect.awareness);
        }
        Ok(next)
    }
}
