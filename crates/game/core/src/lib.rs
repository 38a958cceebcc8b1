//! Deterministic game rules and data types for DevLife.
//!
//! `game-core` defines the canonical state, the catalog oracles, the dialogue
//! state machine and the interaction resolvers, and exposes pure APIs reused
//! by the runtime and the content loader. All state mutation flows through
//! [`engine::GameEngine`], which replaces the snapshot held by a
//! [`store::StateStore`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod interaction;
pub mod state;
pub mod store;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod test_utils;

pub use config::GameConfig;
pub use engine::{
    Command, DialogueController, DialogueError, DialogueStep, Disposition, ExecuteError,
    ExecutionOutcome, GameEngine, InteractionError, InventoryManager, StatDelta, TimerDirective,
    TransitionEngine,
};
pub use env::{
    CatalogSnapshot, Env, EventOracle, GameEnv, ItemDefinition, ItemEffect, ItemKind, ItemOracle,
    LocationDefinition, LocationOracle, NpcDefinition, NpcOracle, OracleError, PcgRng, RngOracle,
    ScrumEventDefinition, TaskDefinition, TaskOracle, compute_seed,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use interaction::{DialogueRequest, Immediate, Interaction, Resolution};
pub use state::{
    Choice, ChoiceEffect, Clock, DialoguePhase, DialogueState, EventId, GameState, InventoryState,
    ItemId, LocationId, Meter, NpcId, Progression, StateError, TaskId, TaskState, TimeOfDay,
    Vitals,
};
pub use store::StateStore;
