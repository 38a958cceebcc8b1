use crate::state::TaskId;

/// The task currently being worked on.
///
/// `progress` is only meaningful while `current` is set; it keeps its last
/// value after a task completes so presentation can show the final 100%.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskState {
    pub current: Option<TaskId>,
    pub progress: u8,
}

impl TaskState {
    pub fn assigned(task: TaskId) -> Self {
        Self {
            current: Some(task),
            progress: 0,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }
}
