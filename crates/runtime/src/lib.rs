//! Session runtime for DevLife.
//!
//! This crate wires the pure rules of `game-core` to an async host. A single
//! session worker owns the authoritative [`game_core::StateStore`], executes
//! commands one at a time and publishes the outcome on a topic-based event
//! bus. Consumers drive the session through the cloneable [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, its builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`oracle`] bundles the loaded catalog into a [`game_core::GameEnv`]
//! - `workers` keeps the session worker and the reveal ticker internal
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{ExecutionReport, Result, RuntimeError, RuntimeHandle};
pub use events::{DialogueEvent, Event, EventBus, GameStateEvent, Topic};
pub use oracle::OracleBundle;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
