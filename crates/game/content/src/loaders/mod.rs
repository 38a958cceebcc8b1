//! Content loaders for reading game data from files.
//!
//! Each loader parses one RON (or TOML) file into game-core definitions.
//! [`ContentFactory`] combines them into a validated
//! [`game_core::CatalogSnapshot`].

pub mod config;
pub mod event;
pub mod factory;
pub mod item;
pub mod location;
pub mod npc;
pub mod task;

pub use config::ConfigLoader;
pub use event::EventLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use location::LocationLoader;
pub use npc::NpcLoader;
pub use task::TaskLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses RON text, naming the catalog in the error.
pub(crate) fn parse_ron<T: DeserializeOwned>(content: &str, what: &str) -> LoadResult<T> {
    ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse {} RON: {}", what, e))
}
