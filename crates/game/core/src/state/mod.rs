//! Authoritative game state representation.
//!
//! A [`GameState`] is an immutable value: every accepted command produces a
//! whole new snapshot which the store swaps in atomically. Runtime layers
//! clone or query snapshots but never mutate them in place.
mod error;
pub mod types;

use std::collections::BTreeSet;

pub use error::StateError;
pub use types::{
    Choice, ChoiceEffect, Clock, DialoguePhase, DialogueState, EventId, InventoryState, ItemId,
    LocationId, Meter, NpcId, Progression, TaskId, TaskState, TimeOfDay, Vitals,
};

use crate::config::GameConfig;

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random picks.
    ///
    /// Set once at session start and never modified. Combined with `nonce`
    /// to derive a unique seed for each random decision.
    pub game_seed: u64,

    /// Number of commands applied so far.
    pub nonce: u64,

    pub progression: Progression,
    pub vitals: Vitals,
    pub clock: Clock,
    pub location: LocationId,
    pub task: TaskState,

    /// Tasks finished over the whole session. Never shrinks.
    pub completed_tasks: BTreeSet<TaskId>,

    /// Scrum events attended since the last morning.
    pub completed_events: BTreeSet<EventId>,

    pub inventory: InventoryState,
    pub dialogue: DialogueState,
}

impl GameState {
    /// Creates the initial state for a new session.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game_seed: 0,
            nonce: 0,
            progression: Progression::default(),
            vitals: Vitals::default(),
            clock: Clock::default(),
            location: LocationId::default(),
            task: TaskState::default(),
            completed_tasks: BTreeSet::new(),
            completed_events: BTreeSet::new(),
            inventory: InventoryState::new(config.inventory_slots),
            dialogue: DialogueState::closed(),
        }
    }

    /// Creates the initial state with a specific game seed.
    pub fn with_seed(config: &GameConfig, game_seed: u64) -> Self {
        Self {
            game_seed,
            ..Self::new(config)
        }
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.clock.time_of_day
    }

    pub fn is_task_completed(&self, task: TaskId) -> bool {
        self.completed_tasks.contains(&task)
    }

    pub fn is_event_completed(&self, event: EventId) -> bool {
        self.completed_events.contains(&event)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
