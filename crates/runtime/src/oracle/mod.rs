//! Runtime wrapper around the static game catalog.
//!
//! The catalog is loaded once, validated, and shared behind an [`Arc`] so the
//! session worker can build [`game_core::Env`] views on demand. The data is
//! immutable at runtime; dynamic state lives in the worker's store.
use std::path::Path;
use std::sync::Arc;

use game_content::ContentFactory;
use game_core::{CatalogSnapshot, GameEnv, PcgRng};

use crate::api::{Result, RuntimeError};

/// Catalog plus the deterministic RNG, ready to be viewed as a [`GameEnv`].
#[derive(Clone, Debug)]
pub struct OracleBundle {
    catalog: Arc<CatalogSnapshot>,
    rng: PcgRng,
}

impl OracleBundle {
    pub fn new(catalog: CatalogSnapshot) -> Self {
        Self {
            catalog: Arc::new(catalog),
            rng: PcgRng,
        }
    }

    /// Loads the catalog compiled into `game-content`.
    pub fn bundled() -> Result<Self> {
        let catalog = ContentFactory::bundled_catalog().map_err(RuntimeError::Content)?;
        Ok(Self::new(catalog))
    }

    /// Loads and validates the catalog from a data directory.
    pub fn from_dir(data_dir: &Path) -> Result<Self> {
        let catalog = ContentFactory::new(data_dir)
            .load_catalog()
            .map_err(RuntimeError::Content)?;
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    /// Converts the bundle into the environment consumed by game-core.
    pub fn as_game_env(&self) -> GameEnv<'_> {
        GameEnv::from_catalog(&self.catalog, &self.rng)
    }
}
