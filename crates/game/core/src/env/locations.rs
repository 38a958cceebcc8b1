use crate::state::{LocationId, NpcId, TimeOfDay};

pub trait LocationOracle: Send + Sync {
    fn location(&self, id: LocationId) -> Option<&LocationDefinition>;

    fn all_locations(&self) -> &[LocationDefinition];
}

/// A place on the map and who can be met there.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationDefinition {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    /// Phases of the day during which the location can be entered.
    pub available_at: Vec<TimeOfDay>,
    pub npcs: Vec<NpcId>,
}

impl LocationDefinition {
    pub fn is_open_at(&self, time: TimeOfDay) -> bool {
        self.available_at.contains(&time)
    }

    pub fn hosts(&self, npc: NpcId) -> bool {
        self.npcs.contains(&npc)
    }
}
