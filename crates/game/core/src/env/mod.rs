//! Traits describing read-only catalog data.
//!
//! Oracles expose locations, items, tasks, scrum events, NPC definitions and
//! deterministic randomness. The [`Env`] aggregate bundles them so the engine
//! can access everything it needs without hard coupling to concrete
//! implementations.
mod error;
mod items;
mod locations;
mod npc;
mod rng;
mod snapshot;
mod tasks;

pub use error::OracleError;
pub use items::{ItemDefinition, ItemEffect, ItemKind, ItemOracle};
pub use locations::{LocationDefinition, LocationOracle};
pub use npc::{NpcDefinition, NpcOracle};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use snapshot::CatalogSnapshot;
pub use tasks::{EventOracle, ScrumEventDefinition, TaskDefinition, TaskOracle};

use crate::state::{EventId, ItemId, LocationId, NpcId, TaskId};

/// Aggregates read-only oracles required by the resolvers and the engine.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, L, I, T, E, N, R>
where
    L: LocationOracle + ?Sized,
    I: ItemOracle + ?Sized,
    T: TaskOracle + ?Sized,
    E: EventOracle + ?Sized,
    N: NpcOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    locations: Option<&'a L>,
    items: Option<&'a I>,
    tasks: Option<&'a T>,
    events: Option<&'a E>,
    npcs: Option<&'a N>,
    rng: Option<&'a R>,
}

pub type GameEnv<'a> = Env<
    'a,
    dyn LocationOracle + 'a,
    dyn ItemOracle + 'a,
    dyn TaskOracle + 'a,
    dyn EventOracle + 'a,
    dyn NpcOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, L, I, T, E, N, R> Env<'a, L, I, T, E, N, R>
where
    L: LocationOracle + ?Sized,
    I: ItemOracle + ?Sized,
    T: TaskOracle + ?Sized,
    E: EventOracle + ?Sized,
    N: NpcOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        locations: Option<&'a L>,
        items: Option<&'a I>,
        tasks: Option<&'a T>,
        events: Option<&'a E>,
        npcs: Option<&'a N>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            locations,
            items,
            tasks,
            events,
            npcs,
            rng,
        }
    }

    pub fn with_all(
        locations: &'a L,
        items: &'a I,
        tasks: &'a T,
        events: &'a E,
        npcs: &'a N,
        rng: &'a R,
    ) -> Self {
        Self::new(
            Some(locations),
            Some(items),
            Some(tasks),
            Some(events),
            Some(npcs),
            Some(rng),
        )
    }

    pub fn empty() -> Self {
        Self {
            locations: None,
            items: None,
            tasks: None,
            events: None,
            npcs: None,
            rng: None,
        }
    }

    /// Returns the LocationOracle, or an error if not available.
    pub fn locations(&self) -> Result<&'a L, OracleError> {
        self.locations.ok_or(OracleError::LocationsNotAvailable)
    }

    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    pub fn tasks(&self) -> Result<&'a T, OracleError> {
        self.tasks.ok_or(OracleError::TasksNotAvailable)
    }

    pub fn events(&self) -> Result<&'a E, OracleError> {
        self.events.ok_or(OracleError::EventsNotAvailable)
    }

    pub fn npcs(&self) -> Result<&'a N, OracleError> {
        self.npcs.ok_or(OracleError::NpcsNotAvailable)
    }

    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Looks up a location definition, failing if the catalog lacks it.
    pub fn location(&self, id: LocationId) -> Result<&'a LocationDefinition, OracleError> {
        self.locations()?
            .location(id)
            .ok_or(OracleError::LocationNotFound(id))
    }

    pub fn item(&self, id: ItemId) -> Result<&'a ItemDefinition, OracleError> {
        self.items()?.item(id).ok_or(OracleError::ItemNotFound(id))
    }

    pub fn task(&self, id: TaskId) -> Result<&'a TaskDefinition, OracleError> {
        self.tasks()?.task(id).ok_or(OracleError::TaskNotFound(id))
    }

    pub fn event(&self, id: EventId) -> Result<&'a ScrumEventDefinition, OracleError> {
        self.events()?.event(id).ok_or(OracleError::EventNotFound(id))
    }

    pub fn npc(&self, id: NpcId) -> Result<&'a NpcDefinition, OracleError> {
        self.npcs()?.npc(id).ok_or(OracleError::NpcNotFound(id))
    }
}

impl<'a, L, I, T, E, N, R> Env<'a, L, I, T, E, N, R>
where
    L: LocationOracle + 'a,
    I: ItemOracle + 'a,
    T: TaskOracle + 'a,
    E: EventOracle + 'a,
    N: NpcOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let locations: Option<&'a dyn LocationOracle> = self.locations.map(|l| l as _);
        let items: Option<&'a dyn ItemOracle> = self.items.map(|i| i as _);
        let tasks: Option<&'a dyn TaskOracle> = self.tasks.map(|t| t as _);
        let events: Option<&'a dyn EventOracle> = self.events.map(|e| e as _);
        let npcs: Option<&'a dyn NpcOracle> = self.npcs.map(|n| n as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|r| r as _);
        Env::new(locations, items, tasks, events, npcs, rng)
    }

    pub fn into_game_env(self) -> GameEnv<'a> {
        self.as_game_env()
    }
}

impl<'a> GameEnv<'a> {
    /// Builds an environment where every catalog oracle is backed by the same snapshot.
    pub fn from_catalog(catalog: &'a CatalogSnapshot, rng: &'a (dyn RngOracle + 'a)) -> Self {
        Env::new(
            Some(catalog as &dyn LocationOracle),
            Some(catalog as &dyn ItemOracle),
            Some(catalog as &dyn TaskOracle),
            Some(catalog as &dyn EventOracle),
            Some(catalog as &dyn NpcOracle),
            Some(rng),
        )
    }
}
