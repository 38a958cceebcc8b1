use crate::state::{EventId, TaskId};

pub trait TaskOracle: Send + Sync {
    fn task(&self, id: TaskId) -> Option<&TaskDefinition>;

    /// All tasks in catalog order. Random picks index into this slice.
    fn all_tasks(&self) -> &[TaskDefinition];
}

pub trait EventOracle: Send + Sync {
    fn event(&self, id: EventId) -> Option<&ScrumEventDefinition>;

    fn all_events(&self) -> &[ScrumEventDefinition];
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskDefinition {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub exp_reward: u32,
    /// Presentation-only deadline in minutes. No transition consumes it.
    pub time_limit: u32,
    /// Lines shown when the task is handed out.
    pub dialogue: Vec<String>,
}

/// A recurring scrum ceremony, attendable once per day.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrumEventDefinition {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub exp_reward: u32,
    pub energy_cost: u32,
    pub dialogue: Vec<String>,
}
