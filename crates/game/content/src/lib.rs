//! Data-driven content definitions and loaders.
//!
//! This crate houses the static catalog of DevLife and provides loaders for
//! RON/TOML data files:
//! - Locations and their opening hours (RON)
//! - Item catalog (RON)
//! - Tasks and scrum events (RON)
//! - NPC definitions (RON)
//! - Session defaults (TOML)
//!
//! Content is consumed through game-core oracles and never appears in game
//! state. A copy of the data directory is compiled in, so the game runs
//! without any files next to the binary.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EventLoader, ItemLoader, LoadResult, LocationLoader, NpcLoader,
    TaskLoader,
};
