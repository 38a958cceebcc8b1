use super::{DialogueRequest, Interaction, Resolution};
use crate::config::GameConfig;
use crate::engine::ExecuteError;
use crate::env::GameEnv;
use crate::state::{Choice, ChoiceEffect, GameState};

/// The desk where assigned tasks are worked on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkstationInteraction;

pub(super) fn no_task() -> Resolution {
    Resolution::Refused(DialogueRequest::message([
        "You need to get a task from the Product Owner first!",
        "Try talking to them to get your next assignment.",
    ]))
}

pub(super) fn too_tired() -> Resolution {
    Resolution::Refused(DialogueRequest::message([
        "You're too tired to work!",
        "Take a break or get some coffee first.",
    ]))
}

pub(super) fn has_work_energy(state: &GameState) -> bool {
    u32::from(state.vitals.energy.value()) >= GameConfig::WORK_ENERGY_COST
}

impl Interaction for WorkstationInteraction {
    fn resolve(&self, state: &GameState, env: &GameEnv<'_>) -> Result<Resolution, ExecuteError> {
        let Some(task_id) = state.task.current else {
            return Ok(no_task());
        };
        if !has_work_energy(state) {
            return Ok(too_tired());
        }

        let task = env.task(task_id)?;
        Ok(Resolution::Offered(
            DialogueRequest::message([
                "Time to work on the task!",
                "Let's start coding...",
                "*keyboard typing intensifies*",
            ])
            .with_choices(vec![Choice::new(
                format!(
                    "Work on \"{}\" (Progress +{}%, Energy -{})",
                    task.title,
                    GameConfig::WORK_PROGRESS_STEP,
                    GameConfig::WORK_ENERGY_COST
                ),
                ChoiceEffect::WorkOnTask,
            )]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::{Meter, TaskId};
    use crate::test_utils::catalog;

    #[test]
    fn low_energy_only_opens_refusal() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::default();
        state.task.current = Some(TaskId::ImplementDarkMode);
        state.vitals.energy = Meter::new(15);

        let resolution = WorkstationInteraction.resolve(&state, &env).unwrap();
        assert_eq!(resolution, too_tired());

        let next = resolution.into_state(&state).unwrap();
        assert_eq!(next.vitals, state.vitals);
        assert_eq!(next.clock, state.clock);
        assert_eq!(next.task, state.task);
        assert!(next.dialogue.choices.is_empty());
    }

    #[test]
    fn offer_names_current_task() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::default();
        state.task.current = Some(TaskId::ImplementDarkMode);

        let resolution = WorkstationInteraction.resolve(&state, &env).unwrap();
        assert_eq!(
            resolution.dialogue().choices[0].text,
            "Work on \"Implement Dark Mode\" (Progress +25%, Energy -20)"
        );
    }

    #[test]
    fn no_task_refuses() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let resolution = WorkstationInteraction
            .resolve(&GameState::default(), &env)
            .unwrap();
        assert_eq!(resolution, no_task());
    }
}
