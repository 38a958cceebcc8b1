use crate::state::{NpcId, TimeOfDay};

pub trait NpcOracle: Send + Sync {
    fn npc(&self, id: NpcId) -> Option<&NpcDefinition>;

    fn all_npcs(&self) -> &[NpcDefinition];
}

/// Static description of a non-player character.
///
/// `position` is only consumed by the scene renderer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcDefinition {
    pub id: NpcId,
    pub title: String,
    pub hint: String,
    pub available_at: Vec<TimeOfDay>,
    pub position: [f32; 3],
}

impl NpcDefinition {
    pub fn is_available_at(&self, time: TimeOfDay) -> bool {
        self.available_at.contains(&time)
    }
}
