use std::collections::BTreeMap;

use crate::config::GameConfig;
use crate::state::ItemId;

/// Items owned by the player.
///
/// Quantities are always strictly positive; an absent id means zero. The slot
/// cap counts distinct ids, not units.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub max_slots: u16,
    pub items: BTreeMap<ItemId, u32>,
}

impl InventoryState {
    pub fn new(max_slots: u16) -> Self {
        Self {
            max_slots,
            items: BTreeMap::new(),
        }
    }

    /// Quantity held for `item` (zero when absent).
    pub fn quantity(&self, item: ItemId) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn used_slots(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_slots as usize
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_INVENTORY_SLOTS)
    }
}
