//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use game_core::{CatalogSnapshot, GameConfig};

use crate::loaders::{
    ConfigLoader, EventLoader, ItemLoader, LoadResult, LocationLoader, NpcLoader, TaskLoader,
};

/// Data files compiled into the binary.
mod bundled {
    pub const LOCATIONS: &str = include_str!("../../data/locations.ron");
    pub const ITEMS: &str = include_str!("../../data/items.ron");
    pub const TASKS: &str = include_str!("../../data/tasks.ron");
    pub const EVENTS: &str = include_str!("../../data/events.ron");
    pub const NPCS: &str = include_str!("../../data/npcs.ron");
    pub const CONFIG: &str = include_str!("../../data/config.toml");
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── locations.ron
/// ├── items.ron
/// ├── tasks.ron
/// ├── events.ron
/// └── npcs.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load and validate the full catalog.
    ///
    /// Fails when a file is missing or malformed, or when the catalog does not
    /// define every identifier exactly once.
    pub fn load_catalog(&self) -> LoadResult<CatalogSnapshot> {
        let catalog = CatalogSnapshot::new(
            LocationLoader::load(&self.data_dir.join("locations.ron"))?,
            ItemLoader::load(&self.data_dir.join("items.ron"))?,
            TaskLoader::load(&self.data_dir.join("tasks.ron"))?,
            EventLoader::load(&self.data_dir.join("events.ron"))?,
            NpcLoader::load(&self.data_dir.join("npcs.ron"))?,
        );
        catalog
            .validate()
            .with_context(|| format!("invalid catalog in {}", self.data_dir.display()))?;
        Ok(catalog)
    }

    /// The catalog shipped with the game.
    pub fn bundled_catalog() -> LoadResult<CatalogSnapshot> {
        let catalog = CatalogSnapshot::new(
            LocationLoader::parse(bundled::LOCATIONS)?,
            ItemLoader::parse(bundled::ITEMS)?,
            TaskLoader::parse(bundled::TASKS)?,
            EventLoader::parse(bundled::EVENTS)?,
            NpcLoader::parse(bundled::NPCS)?,
        );
        catalog.validate().context("invalid bundled catalog")?;
        Ok(catalog)
    }

    pub fn bundled_config() -> LoadResult<GameConfig> {
        ConfigLoader::parse(bundled::CONFIG)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use game_core::{ItemOracle, LocationId, LocationOracle, NpcId, OracleError, TaskOracle};
    use strum::EnumCount;

    use super::*;

    fn write_bundled(dir: &Path) {
        fs::write(dir.join("locations.ron"), bundled::LOCATIONS).unwrap();
        fs::write(dir.join("items.ron"), bundled::ITEMS).unwrap();
        fs::write(dir.join("tasks.ron"), bundled::TASKS).unwrap();
        fs::write(dir.join("events.ron"), bundled::EVENTS).unwrap();
        fs::write(dir.join("npcs.ron"), bundled::NPCS).unwrap();
        fs::write(dir.join("config.toml"), bundled::CONFIG).unwrap();
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_catalog_is_complete() {
        let catalog = ContentFactory::bundled_catalog().unwrap();
        assert_eq!(catalog.all_locations().len(), LocationId::COUNT);
        assert_eq!(catalog.all_items().len(), game_core::ItemId::COUNT);
        assert_eq!(catalog.all_tasks().len(), game_core::TaskId::COUNT);
        assert_eq!(
            catalog.location(LocationId::Cafe).map(|l| l.name.as_str()),
            Some("Coffee Shop")
        );
    }

    #[test]
    fn bundled_catalog_matches_engine_fixture() {
        let bundled = ContentFactory::bundled_catalog().unwrap();
        let fixture = game_core::test_utils::catalog();
        assert_eq!(bundled.locations, fixture.locations);
        assert_eq!(bundled.items, fixture.items);
        assert_eq!(bundled.tasks, fixture.tasks);
        assert_eq!(bundled.events, fixture.events);
        assert_eq!(bundled.npcs, fixture.npcs);
    }

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(ContentFactory::bundled_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn loads_catalog_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_bundled(dir.path());

        let factory = ContentFactory::new(dir.path());
        let catalog = factory.load_catalog().unwrap();
        assert_eq!(catalog, ContentFactory::bundled_catalog().unwrap());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(err.to_string().contains("locations.ron"));
    }

    #[test]
    fn npc_table_must_define_each_npc_once() {
        let dir = tempfile::tempdir().unwrap();
        write_bundled(dir.path());
        let npcs = bundled::NPCS.replace("id: Bartender", "id: Trainer");
        fs::write(dir.path().join("npcs.ron"), npcs).unwrap();

        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        let cause = err.downcast_ref::<OracleError>().unwrap();
        assert!(matches!(
            cause,
            OracleError::DuplicateDefinition { .. }
                | OracleError::NpcNotFound(NpcId::Bartender)
        ));
    }
}
