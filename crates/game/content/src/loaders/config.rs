//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        Self::parse(&read_file(path)?)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
