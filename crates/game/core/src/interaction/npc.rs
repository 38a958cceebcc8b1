use super::{DialogueRequest, Immediate, Interaction, Resolution, join_times};
use crate::config::GameConfig;
use crate::engine::{ExecuteError, InteractionError};
use crate::env::{GameEnv, NpcDefinition, compute_seed};
use crate::error::ErrorContext;
use crate::state::{Choice, ChoiceEffect, GameState, ItemId, NpcId};

/// Counter menu of the barista: item and the label shown on the choice.
const BARISTA_MENU: [(ItemId, &str); 2] = [
    (ItemId::Coffee, "Coffee (Energy +30, $5)"),
    (ItemId::EnergyDrink, "Energy Drink (Energy +50, Health -10, $8)"),
];

/// Talk to a non-player character at the current location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NpcInteraction {
    pub npc: NpcId,
}

impl NpcInteraction {
    pub fn new(npc: NpcId) -> Self {
        Self { npc }
    }

    fn product_owner(state: &GameState, env: &GameEnv<'_>) -> Result<Resolution, ExecuteError> {
        if state.task.is_busy() {
            return Ok(Resolution::Refused(DialogueRequest::message([
                "You still have an ongoing task!",
                "Let's focus on one thing at a time.",
                "Complete your current task first.",
            ])));
        }

        let remaining: Vec<_> = env
            .tasks()?
            .all_tasks()
            .iter()
            .filter(|task| !state.is_task_completed(task.id))
            .collect();

        let seed = compute_seed(state.game_seed, state.nonce, NpcId::ProductOwner as u32, 0);
        let Some(index) = env.rng()?.pick_index(seed, remaining.len()) else {
            return Ok(Resolution::Informed(DialogueRequest::message([
                "Great work! You've completed all available tasks.",
                "Take a break and come back later for more challenges.",
            ])));
        };

        let task = remaining[index];
        Ok(Resolution::Applied {
            dialogue: DialogueRequest::message(task.dialogue.iter().cloned()),
            effect: Immediate::AssignTask(task.id),
        })
    }

    fn scrum_master(state: &GameState, env: &GameEnv<'_>) -> Result<Resolution, ExecuteError> {
        let choices: Vec<_> = env
            .events()?
            .all_events()
            .iter()
            .filter(|event| !state.is_event_completed(event.id))
            .map(|event| {
                Choice::new(
                    format!(
                        "{} (EXP +{}, Energy -{})",
                        event.title, event.exp_reward, event.energy_cost
                    ),
                    ChoiceEffect::JoinEvent(event.id),
                )
            })
            .collect();

        if choices.is_empty() {
            return Ok(Resolution::Informed(DialogueRequest::message([
                "You've participated in all events for now!",
                "Come back tomorrow for more Scrum events.",
            ])));
        }

        Ok(Resolution::Offered(
            DialogueRequest::message(["What Scrum event would you like to participate in?"])
                .with_choices(choices),
        ))
    }

    fn barista() -> Resolution {
        let choices = BARISTA_MENU
            .iter()
            .map(|&(item, label)| Choice::new(label, ChoiceEffect::Purchase(item)))
            .collect();
        Resolution::Offered(
            DialogueRequest::message(["Welcome! What can I get you?"]).with_choices(choices),
        )
    }

    fn trainer(state: &GameState) -> Resolution {
        if u32::from(state.vitals.energy.value()) < GameConfig::WORKOUT_ENERGY_COST {
            return trainer_refusal();
        }
        Resolution::Offered(
            DialogueRequest::message(["Ready for a workout?"]).with_choices(vec![Choice::new(
                format!(
                    "Quick workout (Health +{}, Energy -{})",
                    GameConfig::WORKOUT_HEALTH_GAIN,
                    GameConfig::WORKOUT_ENERGY_COST
                ),
                ChoiceEffect::Workout,
            )]),
        )
    }

    fn bartender() -> Resolution {
        Resolution::Offered(
            DialogueRequest::message(["Welcome to the Tech Bar! What can I get you?"])
                .with_choices(vec![Choice::new(
                    format!(
                        "Chat about tech (Awareness +{}, Energy -{})",
                        GameConfig::BAR_CHAT_AWARENESS_GAIN,
                        GameConfig::BAR_CHAT_ENERGY_COST
                    ),
                    ChoiceEffect::BarChat,
                )]),
        )
    }
}

pub(super) fn trainer_refusal() -> Resolution {
    Resolution::Refused(DialogueRequest::message([
        "You look exhausted!".to_owned(),
        "Come back when you have more energy.".to_owned(),
        format!(
            "Exercise requires at least {} energy.",
            GameConfig::WORKOUT_ENERGY_COST
        ),
    ]))
}

fn unavailable(npc: &NpcDefinition, state: &GameState) -> Resolution {
    Resolution::Refused(DialogueRequest::message([
        format!(
            "The {} is not around at {}.",
            npc.title,
            state.time_of_day()
        ),
        format!("Available at: {}", join_times(&npc.available_at)),
    ]))
}

impl Interaction for NpcInteraction {
    fn resolve(&self, state: &GameState, env: &GameEnv<'_>) -> Result<Resolution, ExecuteError> {
        let location = env.location(state.location)?;
        if !location.hosts(self.npc) {
            return Err(InteractionError::NpcNotPresent {
                npc: self.npc,
                context: ErrorContext::new(state.nonce).with_location(state.location),
            }
            .into());
        }

        let definition = env.npc(self.npc)?;
        if !definition.is_available_at(state.time_of_day()) {
            return Ok(unavailable(definition, state));
        }

        match self.npc {
            NpcId::ProductOwner => Self::product_owner(state, env),
            NpcId::ScrumMaster => Self::scrum_master(state, env),
            NpcId::Barista => Ok(Self::barista()),
            NpcId::Trainer => Ok(Self::trainer(state)),
            NpcId::Bartender => Ok(Self::bartender()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::{Clock, EventId, LocationId, Meter, TaskId, TimeOfDay};
    use crate::test_utils::catalog;
    use strum::IntoEnumIterator;

    fn at(location: LocationId) -> GameState {
        GameState {
            location,
            ..GameState::default()
        }
    }

    #[test]
    fn npc_elsewhere_is_an_error() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let err = NpcInteraction::new(NpcId::Barista)
            .resolve(&at(LocationId::Office), &env)
            .unwrap_err();
        assert!(matches!(
            err,
            ExecuteError::Interaction(InteractionError::NpcNotPresent {
                npc: NpcId::Barista,
                ..
            })
        ));
    }

    #[test]
    fn npc_off_duty_refuses() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = at(LocationId::Office);
        state.clock = Clock::new(1, TimeOfDay::Evening);

        let resolution = NpcInteraction::new(NpcId::ScrumMaster)
            .resolve(&state, &env)
            .unwrap();
        assert!(resolution.is_refusal());
        assert_eq!(
            resolution.dialogue().messages[1],
            "Available at: morning, noon"
        );
    }

    #[test]
    fn product_owner_assigns_an_open_task() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = at(LocationId::Office);
        state.completed_tasks.insert(TaskId::FixCriticalBug);
        state.completed_tasks.insert(TaskId::ImplementDarkMode);

        let resolution = NpcInteraction::new(NpcId::ProductOwner)
            .resolve(&state, &env)
            .unwrap();
        assert_eq!(
            resolution,
            Resolution::Applied {
                dialogue: DialogueRequest::message(
                    catalog.tasks[2].dialogue.iter().cloned()
                ),
                effect: Immediate::AssignTask(TaskId::OptimizePerformance),
            }
        );

        let next = resolution.into_state(&state).unwrap();
        assert_eq!(next.task.current, Some(TaskId::OptimizePerformance));
        assert_eq!(next.task.progress, 0);
    }

    #[test]
    fn product_owner_pick_is_deterministic() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = at(LocationId::Office);
        state.game_seed = 1234;

        let first = NpcInteraction::new(NpcId::ProductOwner).resolve(&state, &env).unwrap();
        let second = NpcInteraction::new(NpcId::ProductOwner).resolve(&state, &env).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn product_owner_refuses_while_busy_and_informs_when_done() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);

        let mut busy = at(LocationId::Office);
        busy.task.current = Some(TaskId::FixCriticalBug);
        let resolution = NpcInteraction::new(NpcId::ProductOwner)
            .resolve(&busy, &env)
            .unwrap();
        assert!(resolution.is_refusal());

        let mut done = at(LocationId::Office);
        done.completed_tasks.extend(TaskId::iter());
        let resolution = NpcInteraction::new(NpcId::ProductOwner)
            .resolve(&done, &env)
            .unwrap();
        assert!(matches!(resolution, Resolution::Informed(_)));
    }

    #[test]
    fn scrum_master_offers_only_pending_events() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = at(LocationId::Office);
        state.completed_events.insert(EventId::Daily);

        let resolution = NpcInteraction::new(NpcId::ScrumMaster)
            .resolve(&state, &env)
            .unwrap();
        let choices = &resolution.dialogue().choices;
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].text, "Sprint Retrospective (EXP +50, Energy -25)");
        assert_eq!(choices[0].effect, ChoiceEffect::JoinEvent(EventId::Retro));
    }

    #[test]
    fn trainer_refuses_below_workout_cost() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = at(LocationId::Gym);
        state.vitals.energy = Meter::new(29);

        let resolution = NpcInteraction::new(NpcId::Trainer)
            .resolve(&state, &env)
            .unwrap();
        assert!(resolution.is_refusal());
        assert_eq!(
            resolution.dialogue().messages[2],
            "Exercise requires at least 30 energy."
        );
    }

    #[test]
    fn barista_offers_menu() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let resolution = NpcInteraction::new(NpcId::Barista)
            .resolve(&at(LocationId::Cafe), &env)
            .unwrap();
        let effects: Vec<_> = resolution
            .dialogue()
            .choices
            .iter()
            .map(|choice| choice.effect)
            .collect();
        assert_eq!(
            effects,
            vec![
                ChoiceEffect::Purchase(ItemId::Coffee),
                ChoiceEffect::Purchase(ItemId::EnergyDrink)
            ]
        );
    }

    #[test]
    fn scrum_master_informs_once_every_event_is_attended() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = at(LocationId::Office);
        state.completed_events.extend(EventId::iter());

        let resolution = NpcInteraction::new(NpcId::ScrumMaster)
            .resolve(&state, &env)
            .unwrap();
        assert_eq!(
            resolution,
            Resolution::Informed(DialogueRequest::message([
                "You've participated in all events for now!",
                "Come back tomorrow for more Scrum events.",
            ]))
        );
        assert!(resolution.dialogue().choices.is_empty());
    }

    #[test]
    fn trainer_offers_workout_with_enough_energy() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = at(LocationId::Gym);
        state.vitals.energy = Meter::new(30);

        let resolution = NpcInteraction::new(NpcId::Trainer)
            .resolve(&state, &env)
            .unwrap();
        assert!(matches!(resolution, Resolution::Offered(_)));
        let dialogue = resolution.dialogue();
        assert_eq!(dialogue.messages, vec!["Ready for a workout?".to_owned()]);
        assert_eq!(dialogue.choices.len(), 1);
        assert_eq!(dialogue.choices[0].text, "Quick workout (Health +20, Energy -30)");
        assert_eq!(dialogue.choices[0].effect, ChoiceEffect::Workout);
    }

    #[test]
    fn bartender_offers_tech_chat_in_the_evening() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = at(LocationId::Bar);
        state.clock = Clock::new(1, TimeOfDay::Evening);

        let resolution = NpcInteraction::new(NpcId::Bartender)
            .resolve(&state, &env)
            .unwrap();
        assert!(matches!(resolution, Resolution::Offered(_)));
        let dialogue = resolution.dialogue();
        assert_eq!(
            dialogue.messages,
            vec!["Welcome to the Tech Bar! What can I get you?".to_owned()]
        );
        assert_eq!(
            dialogue.choices[0].text,
            "Chat about tech (Awareness +10, Energy -10)"
        );
        assert_eq!(dialogue.choices[0].effect, ChoiceEffect::BarChat);
    }
}
