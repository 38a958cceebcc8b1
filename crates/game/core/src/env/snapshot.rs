//! In-memory catalog backing every oracle.
//!
//! The content crate builds a [`CatalogSnapshot`] from data files; tests build
//! one by hand. Either way [`CatalogSnapshot::validate`] must pass before the
//! snapshot is handed to the engine.

use std::collections::BTreeSet;

use strum::IntoEnumIterator;

use super::{
    EventOracle, ItemDefinition, ItemOracle, LocationDefinition, LocationOracle, NpcDefinition,
    NpcOracle, OracleError, ScrumEventDefinition, TaskDefinition, TaskOracle,
};
use crate::state::{EventId, ItemId, LocationId, NpcId, TaskId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete static content of the game.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogSnapshot {
    pub locations: Vec<LocationDefinition>,
    pub items: Vec<ItemDefinition>,
    pub tasks: Vec<TaskDefinition>,
    pub events: Vec<ScrumEventDefinition>,
    pub npcs: Vec<NpcDefinition>,
}

impl CatalogSnapshot {
    pub fn new(
        locations: Vec<LocationDefinition>,
        items: Vec<ItemDefinition>,
        tasks: Vec<TaskDefinition>,
        events: Vec<ScrumEventDefinition>,
        npcs: Vec<NpcDefinition>,
    ) -> Self {
        Self {
            locations,
            items,
            tasks,
            events,
            npcs,
        }
    }

    /// Checks that every id variant has exactly one definition, that
    /// locations only reference defined NPCs and that every task and event
    /// carries at least one non-blank dialogue line.
    pub fn validate(&self) -> Result<(), OracleError> {
        exhaustive(
            "locations",
            self.locations.iter().map(|l| l.id),
            OracleError::LocationNotFound,
        )?;
        exhaustive(
            "items",
            self.items.iter().map(|i| i.id),
            OracleError::ItemNotFound,
        )?;
        exhaustive(
            "tasks",
            self.tasks.iter().map(|t| t.id),
            OracleError::TaskNotFound,
        )?;
        exhaustive(
            "events",
            self.events.iter().map(|e| e.id),
            OracleError::EventNotFound,
        )?;
        exhaustive(
            "npcs",
            self.npcs.iter().map(|n| n.id),
            OracleError::NpcNotFound,
        )?;

        for location in &self.locations {
            for &npc in &location.npcs {
                if self.npc(npc).is_none() {
                    return Err(OracleError::UnknownNpcReference {
                        location: location.id,
                        npc,
                    });
                }
            }
        }

        for task in &self.tasks {
            spoken("tasks", task.id, &task.dialogue)?;
        }
        for event in &self.events {
            spoken("events", event.id, &event.dialogue)?;
        }
        Ok(())
    }

    /// Location hosting `npc`, if any.
    pub fn location_of(&self, npc: NpcId) -> Option<LocationId> {
        self.locations
            .iter()
            .find(|location| location.hosts(npc))
            .map(|location| location.id)
    }
}

fn exhaustive<I>(
    table: &str,
    ids: impl Iterator<Item = I>,
    missing: fn(I) -> OracleError,
) -> Result<(), OracleError>
where
    I: IntoEnumIterator + Ord + Copy + core::fmt::Display,
{
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(OracleError::DuplicateDefinition {
                table: table.to_owned(),
                id: id.to_string(),
            });
        }
    }
    match I::iter().find(|id| !seen.contains(id)) {
        Some(id) => Err(missing(id)),
        None => Ok(()),
    }
}

fn spoken(table: &str, id: impl core::fmt::Display, lines: &[String]) -> Result<(), OracleError> {
    if lines.is_empty() || lines.iter().any(|line| line.trim().is_empty()) {
        return Err(OracleError::EmptyDialogue {
            table: table.to_owned(),
            id: id.to_string(),
        });
    }
    Ok(())
}

impl LocationOracle for CatalogSnapshot {
    fn location(&self, id: LocationId) -> Option<&LocationDefinition> {
        self.locations.iter().find(|def| def.id == id)
    }

    fn all_locations(&self) -> &[LocationDefinition] {
        &self.locations
    }
}

impl ItemOracle for CatalogSnapshot {
    fn item(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.iter().find(|def| def.id == id)
    }

    fn all_items(&self) -> &[ItemDefinition] {
        &self.items
    }
}

impl TaskOracle for CatalogSnapshot {
    fn task(&self, id: TaskId) -> Option<&TaskDefinition> {
        self.tasks.iter().find(|def| def.id == id)
    }

    fn all_tasks(&self) -> &[TaskDefinition] {
        &self.tasks
    }
}

impl EventOracle for CatalogSnapshot {
    fn event(&self, id: EventId) -> Option<&ScrumEventDefinition> {
        self.events.iter().find(|def| def.id == id)
    }

    fn all_events(&self) -> &[ScrumEventDefinition] {
        &self.events
    }
}

impl NpcOracle for CatalogSnapshot {
    fn npc(&self, id: NpcId) -> Option<&NpcDefinition> {
        self.npcs.iter().find(|def| def.id == id)
    }

    fn all_npcs(&self) -> &[NpcDefinition] {
        &self.npcs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::test_utils::catalog;

    #[test]
    fn fixture_catalog_is_valid() {
        assert_eq!(catalog().validate(), Ok(()));
    }

    #[test]
    fn missing_definition_is_reported() {
        let mut snapshot = catalog();
        snapshot.tasks.retain(|task| task.id != TaskId::OptimizePerformance);
        assert_eq!(
            snapshot.validate(),
            Err(OracleError::TaskNotFound(TaskId::OptimizePerformance))
        );
    }

    #[test]
    fn duplicate_definition_is_reported() {
        let mut snapshot = catalog();
        let coffee = snapshot.items[0].clone();
        snapshot.items.push(coffee);
        assert!(matches!(
            snapshot.validate(),
            Err(OracleError::DuplicateDefinition { ref table, .. }) if table == "items"
        ));
    }

    #[test]
    fn task_without_dialogue_is_rejected() {
        let mut snapshot = catalog();
        snapshot.tasks[0].dialogue.clear();
        let err = snapshot.validate().unwrap_err();
        assert_eq!(
            err,
            OracleError::EmptyDialogue {
                table: "tasks".to_owned(),
                id: snapshot.tasks[0].id.to_string(),
            }
        );
        assert_eq!(err.error_code(), "ORACLE_EMPTY_DIALOGUE");
    }

    #[test]
    fn blank_dialogue_line_is_rejected() {
        let mut snapshot = catalog();
        snapshot.tasks[1].dialogue.push("   ".to_owned());
        assert!(matches!(
            snapshot.validate(),
            Err(OracleError::EmptyDialogue { ref table, .. }) if table == "tasks"
        ));

        let mut snapshot = catalog();
        snapshot.events[0].dialogue.insert(0, String::new());
        assert!(matches!(
            snapshot.validate(),
            Err(OracleError::EmptyDialogue { ref table, .. }) if table == "events"
        ));
    }

    #[test]
    fn location_of_finds_host() {
        assert_eq!(catalog().location_of(NpcId::Barista), Some(LocationId::Cafe));
    }
}
