//! State management errors.
//!
//! Errors raised by inventory bookkeeping on the snapshot.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemId;

/// Errors that occur while mutating inventory state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Adding a new distinct item would exceed the slot cap.
    #[error("inventory is full (max slots: {max_slots})")]
    InventoryFull { max_slots: u16 },

    /// The player holds none of this item.
    #[error("item {0} is not owned")]
    ItemNotOwned(ItemId),

    /// Quantities must be strictly positive.
    #[error("invalid quantity {quantity} for item {item}")]
    InvalidQuantity { item: ItemId, quantity: u32 },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            InventoryFull { .. } => ErrorSeverity::Recoverable,
            ItemNotOwned(_) | InvalidQuantity { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            InventoryFull { .. } => "STATE_INVENTORY_FULL",
            ItemNotOwned(_) => "STATE_ITEM_NOT_OWNED",
            InvalidQuantity { .. } => "STATE_INVALID_QUANTITY",
        }
    }
}
