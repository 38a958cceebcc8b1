//! Oracle access errors.
//!
//! Errors related to oracle availability, catalog lookups and catalog
//! validation.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EventId, ItemId, LocationId, NpcId, TaskId};

/// Errors that occur when accessing or validating catalog data.
///
/// A missing definition means the catalog and the id enums disagree, which
/// startup validation is supposed to rule out.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("LocationOracle not available")]
    LocationsNotAvailable,

    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("TaskOracle not available")]
    TasksNotAvailable,

    #[error("EventOracle not available")]
    EventsNotAvailable,

    #[error("NpcOracle not available")]
    NpcsNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("location definition {0} not found")]
    LocationNotFound(LocationId),

    #[error("item definition {0} not found")]
    ItemNotFound(ItemId),

    #[error("task definition {0} not found")]
    TaskNotFound(TaskId),

    #[error("event definition {0} not found")]
    EventNotFound(EventId),

    #[error("npc definition {0} not found")]
    NpcNotFound(NpcId),

    /// The same id is defined more than once in a catalog table.
    #[error("{table} defines '{id}' more than once")]
    DuplicateDefinition { table: String, id: String },

    /// A location lists an NPC the catalog does not define.
    #[error("location {location} references undefined npc {npc}")]
    UnknownNpcReference { location: LocationId, npc: NpcId },

    /// A task or event has no dialogue, or a blank dialogue line.
    #[error("{table} entry '{id}' has empty dialogue")]
    EmptyDialogue { table: String, id: String },
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            LocationsNotAvailable | ItemsNotAvailable | TasksNotAvailable | EventsNotAvailable
            | NpcsNotAvailable | RngNotAvailable => ErrorSeverity::Fatal,

            DuplicateDefinition { .. } | UnknownNpcReference { .. } | EmptyDialogue { .. } => {
                ErrorSeverity::Fatal
            }

            LocationNotFound(_) | ItemNotFound(_) | TaskNotFound(_) | EventNotFound(_)
            | NpcNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            LocationsNotAvailable => "ORACLE_LOCATIONS_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            TasksNotAvailable => "ORACLE_TASKS_NOT_AVAILABLE",
            EventsNotAvailable => "ORACLE_EVENTS_NOT_AVAILABLE",
            NpcsNotAvailable => "ORACLE_NPCS_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            LocationNotFound(_) => "ORACLE_LOCATION_NOT_FOUND",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            TaskNotFound(_) => "ORACLE_TASK_NOT_FOUND",
            EventNotFound(_) => "ORACLE_EVENT_NOT_FOUND",
            NpcNotFound(_) => "ORACLE_NPC_NOT_FOUND",
            DuplicateDefinition { .. } => "ORACLE_DUPLICATE_DEFINITION",
            UnknownNpcReference { .. } => "ORACLE_UNKNOWN_NPC_REFERENCE",
            EmptyDialogue { .. } => "ORACLE_EMPTY_DIALOGUE",
        }
    }
}
