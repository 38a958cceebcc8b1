//! Task catalog loader.

use std::path::Path;

use game_core::TaskDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCatalog {
    pub tasks: Vec<TaskDefinition>,
}

pub struct TaskLoader;

impl TaskLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<TaskDefinition>> {
        Self::parse(&read_file(path)?)
    }

    /// Parses a task catalog. Catalog order is kept: random picks index into it.
    pub fn parse(content: &str) -> LoadResult<Vec<TaskDefinition>> {
        let catalog: TaskCatalog = parse_ron(content, "task catalog")?;
        Ok(catalog.tasks)
    }
}
