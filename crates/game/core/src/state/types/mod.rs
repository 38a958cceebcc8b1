pub mod clock;
pub mod common;
pub mod dialogue;
pub mod inventory;
pub mod stats;
pub mod task;

pub use clock::{Clock, TimeOfDay};
pub use common::{EventId, ItemId, LocationId, NpcId, TaskId};
pub use dialogue::{Choice, ChoiceEffect, DialoguePhase, DialogueState};
pub use inventory::InventoryState;
pub use stats::{Meter, Progression, Vitals};
pub use task::TaskState;
