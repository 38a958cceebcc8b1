//! NPC catalog loader.

use std::path::Path;

use game_core::NpcDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcCatalog {
    pub npcs: Vec<NpcDefinition>,
}

pub struct NpcLoader;

impl NpcLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<NpcDefinition>> {
        Self::parse(&read_file(path)?)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<NpcDefinition>> {
        let catalog: NpcCatalog = parse_ron(content, "npc catalog")?;
        Ok(catalog.npcs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{NpcId, TimeOfDay};

    #[test]
    fn parses_position_tuple() {
        let npcs = NpcLoader::parse(
            r#"(npcs: [(
                id: Trainer,
                title: "Trainer",
                hint: "Exercise",
                available_at: [Morning, Noon],
                position: (3.0, 0.0, 3.0),
            )])"#,
        )
        .unwrap();
        assert_eq!(npcs[0].id, NpcId::Trainer);
        assert_eq!(npcs[0].available_at, vec![TimeOfDay::Morning, TimeOfDay::Noon]);
        assert_eq!(npcs[0].position, [3.0, 0.0, 3.0]);
    }
}
