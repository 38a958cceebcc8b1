//! Item catalog loader.

use std::path::Path;

use game_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        Self::parse(&read_file(path)?)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = parse_ron(content, "item catalog")?;
        Ok(catalog.items)
    }
}
