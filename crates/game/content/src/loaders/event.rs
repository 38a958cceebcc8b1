//! Scrum event catalog loader.

use std::path::Path;

use game_core::ScrumEventDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCatalog {
    pub events: Vec<ScrumEventDefinition>,
}

pub struct EventLoader;

impl EventLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ScrumEventDefinition>> {
        Self::parse(&read_file(path)?)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ScrumEventDefinition>> {
        let catalog: EventCatalog = parse_ron(content, "event catalog")?;
        Ok(catalog.events)
    }
}
