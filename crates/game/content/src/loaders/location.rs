//! Location catalog loader.

use std::path::Path;

use game_core::LocationDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCatalog {
    pub locations: Vec<LocationDefinition>,
}

pub struct LocationLoader;

impl LocationLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<LocationDefinition>> {
        Self::parse(&read_file(path)?)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<LocationDefinition>> {
        let catalog: LocationCatalog = parse_ron(content, "location catalog")?;
        Ok(catalog.locations)
    }
}
