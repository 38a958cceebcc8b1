//! Interpreter for choice effects.
//!
//! Eligibility is checked again here against the snapshot current at
//! selection time; the offer that produced the choice may be stale.

use super::npc::trainer_refusal;
use super::workstation::{has_work_energy, no_task, too_tired};
use super::{DialogueRequest, Resolution, time_passes};
use crate::config::GameConfig;
use crate::engine::{ExecuteError, InventoryManager, StatDelta, TransitionEngine};
use crate::env::GameEnv;
use crate::state::{ChoiceEffect, EventId, GameState, ItemId, StateError};

/// Applies `effect` to `state` and opens the dialogue describing the result.
pub fn apply_choice(
    effect: ChoiceEffect,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<GameState, ExecuteError> {
    match effect {
        ChoiceEffect::JoinEvent(event) => join_event(event, state, env),
        ChoiceEffect::Purchase(item) => purchase(item, state, env),
        ChoiceEffect::Workout => workout(state),
        ChoiceEffect::BarChat => bar_chat(state),
        ChoiceEffect::WorkOnTask => work_on_task(state, env),
        ChoiceEffect::UseItem(item) => use_item(item, state, env),
    }
}

fn refuse(resolution: Resolution, state: &GameState) -> Result<GameState, ExecuteError> {
    Ok(resolution.into_state(state)?)
}

fn join_event(
    event: EventId,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<GameState, ExecuteError> {
    let definition = env.event(event)?;

    if state.is_event_completed(event) {
        return refuse(
            Resolution::Refused(DialogueRequest::message([
                format!("You've already attended the {} today.", definition.title),
                "Come back tomorrow for more Scrum events.".to_owned(),
            ])),
            state,
        );
    }
    if u32::from(state.vitals.energy.value()) < definition.energy_cost {
        return refuse(
            Resolution::Refused(DialogueRequest::message([
                "You're too tired for this event.",
                "Take a break and restore your energy first.",
                "Remember, sustainable pace is key!",
            ])),
            state,
        );
    }

    let delta = StatDelta::new()
        .energy_cost(definition.energy_cost)
        .exp_gain(definition.exp_reward)
        .awareness_gain(GameConfig::SCRUM_AWARENESS_GAIN);
    // record after the transition so a day wrap cannot erase it
    let mut next = TransitionEngine::apply(state, &delta);
    next.completed_events.insert(event);

    let mut messages = definition.dialogue.clone();
    messages.push(time_passes(next.time_of_day()));
    Ok(DialogueRequest::message(messages).open_on(&next)?)
}

fn purchase(item: ItemId, state: &GameState, env: &GameEnv<'_>) -> Result<GameState, ExecuteError> {
    let definition = env.item(item)?;
    let next = match InventoryManager::add(state, item, 1) {
        Ok(next) => next,
        Err(StateError::InventoryFull { .. }) => {
            return refuse(
                Resolution::Refused(DialogueRequest::message([
                    "Your inventory is full!",
                    "Make some room before buying more.",
                ])),
                state,
            );
        }
        Err(error) => return Err(error.into()),
    };

    let line = match item {
        ItemId::Coffee => "Here's your coffee! Enjoy!".to_owned(),
        ItemId::EnergyDrink => "One energy drink coming right up!".to_owned(),
        _ => format!("Here's your {}!", definition.name),
    };
    Ok(DialogueRequest::message([line]).open_on(&next)?)
}

fn workout(state: &GameState) -> Result<GameState, ExecuteError> {
    if u32::from(state.vitals.energy.value()) < GameConfig::WORKOUT_ENERGY_COST {
        return refuse(trainer_refusal(), state);
    }
    let next = TransitionEngine::apply(state, &StatDelta::workout());
    let time = time_passes(next.time_of_day());
    Ok(DialogueRequest::message([
        "Great workout!".to_owned(),
        "You're feeling energized and healthy.".to_owned(),
        time,
    ])
    .open_on(&next)?)
}

fn bar_chat(state: &GameState) -> Result<GameState, ExecuteError> {
    let next = TransitionEngine::apply(state, &StatDelta::bar_chat());
    let time = time_passes(next.time_of_day());
    Ok(DialogueRequest::message([
        "Interesting discussion about the latest tech trends!".to_owned(),
        time,
    ])
    .open_on(&next)?)
}

fn work_on_task(state: &GameState, env: &GameEnv<'_>) -> Result<GameState, ExecuteError> {
    let Some(task_id) = state.task.current else {
        return refuse(no_task(), state);
    };
    if !has_work_energy(state) {
        return refuse(too_tired(), state);
    }
    let task = env.task(task_id)?;

    let progress = state
        .task
        .progress
        .saturating_add(GameConfig::WORK_PROGRESS_STEP)
        .min(GameConfig::TASK_COMPLETE);
    let completed = progress >= GameConfig::TASK_COMPLETE;

    let mut delta = StatDelta::work_session();
    if completed {
        delta = delta.exp_gain(task.exp_reward);
    }
    let mut next = TransitionEngine::apply(state, &delta);
    next.task.progress = progress;
    if completed {
        next.task.current = None;
        next.completed_tasks.insert(task_id);
    }

    let headline = if completed {
        "Task completed! Great work!"
    } else {
        "Progress saved! Keep going!"
    };
    let time = time_passes(next.time_of_day());
    Ok(DialogueRequest::message([headline.to_owned(), time]).open_on(&next)?)
}

fn use_item(item: ItemId, state: &GameState, env: &GameEnv<'_>) -> Result<GameState, ExecuteError> {
    let definition = env.item(item)?;
    if state.inventory.quantity(item) == 0 {
        return Err(StateError::ItemNotOwned(item).into());
    }

    if definition.is_consumable() && definition.effect.is_some() {
        let next = InventoryManager::consume(state, definition)?;
        return Ok(DialogueRequest::message([format!("Used {}!", definition.name)]).open_on(&next)?);
    }
    Ok(DialogueRequest::message([definition.description.clone()]).open_on(state)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::PcgRng;
    use crate::state::{Clock, DialoguePhase, Meter, TaskId, TimeOfDay};
    use crate::test_utils::catalog;

    #[test]
    fn standup_from_initial_state() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let state = GameState::default();

        let next = apply_choice(ChoiceEffect::JoinEvent(EventId::Daily), &state, &env).unwrap();

        assert_eq!(next.vitals.energy.value(), 90);
        assert_eq!(next.vitals.awareness.value(), 5);
        assert_eq!(next.progression.exp, 20);
        assert_eq!(next.progression.level, 1);
        assert_eq!(next.time_of_day(), TimeOfDay::Noon);
        assert!(next.is_event_completed(EventId::Daily));
        assert_eq!(
            next.dialogue.messages.last().map(String::as_str),
            Some("Time passes... It's now noon.")
        );
        assert_eq!(next.dialogue.phase, DialoguePhase::Revealing);
    }

    #[test]
    fn event_at_night_survives_day_wrap() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::default();
        state.clock = Clock::new(1, TimeOfDay::Night);

        let next = apply_choice(ChoiceEffect::JoinEvent(EventId::Retro), &state, &env).unwrap();
        assert_eq!(next.clock, Clock::new(2, TimeOfDay::Morning));
        assert!(next.is_event_completed(EventId::Retro));
    }

    #[test]
    fn tired_player_cannot_join_event() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::default();
        state.vitals.energy = Meter::new(20);

        let next = apply_choice(ChoiceEffect::JoinEvent(EventId::Retro), &state, &env).unwrap();
        assert_eq!(next.vitals, state.vitals);
        assert_eq!(next.clock, state.clock);
        assert!(next.completed_events.is_empty());
        assert_eq!(next.dialogue.messages[0], "You're too tired for this event.");
    }

    #[test]
    fn four_work_sessions_complete_task_once() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::default();
        state.task.current = Some(TaskId::FixCriticalBug);

        for _ in 0..4 {
            state = apply_choice(ChoiceEffect::WorkOnTask, &state, &env).unwrap();
        }

        assert_eq!(state.task.progress, 100);
        assert_eq!(state.task.current, None);
        assert_eq!(
            state.completed_tasks.iter().copied().collect::<Vec<_>>(),
            vec![TaskId::FixCriticalBug]
        );
        assert_eq!(state.vitals.energy.value(), 20);
        assert_eq!(state.progression.level, 2);
        assert_eq!(state.progression.exp, 0);
        assert_eq!(state.dialogue.messages[0], "Task completed! Great work!");

        // a fifth session has nothing to work on
        let after = apply_choice(ChoiceEffect::WorkOnTask, &state, &env).unwrap();
        assert_eq!(after.completed_tasks, state.completed_tasks);
        assert_eq!(after.vitals, state.vitals);
    }

    #[test]
    fn purchase_into_full_inventory_refuses() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::new(&GameConfig::default().with_inventory_slots(1));
        state.inventory.items.insert(ItemId::HealthySnack, 1);

        let next = apply_choice(ChoiceEffect::Purchase(ItemId::Coffee), &state, &env).unwrap();
        assert_eq!(next.inventory, state.inventory);
        assert_eq!(next.dialogue.messages[0], "Your inventory is full!");
    }

    #[test]
    fn purchase_keeps_time() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let state = GameState::default();

        let next = apply_choice(ChoiceEffect::Purchase(ItemId::Coffee), &state, &env).unwrap();
        assert_eq!(next.inventory.quantity(ItemId::Coffee), 1);
        assert_eq!(next.clock, state.clock);
        assert_eq!(next.dialogue.messages[0], "Here's your coffee! Enjoy!");
    }

    #[test]
    fn workout_trades_energy_for_health() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::default();
        state.vitals.health = Meter::new(60);

        let next = apply_choice(ChoiceEffect::Workout, &state, &env).unwrap();
        assert_eq!(next.vitals.health.value(), 80);
        assert_eq!(next.vitals.energy.value(), 70);
        assert_eq!(next.vitals.awareness.value(), 5);
        assert_eq!(next.dialogue.messages.len(), 3);
    }

    #[test]
    fn collectible_is_described_not_consumed() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::default();
        state.inventory.items.insert(ItemId::MeditationGuide, 1);

        let next =
            apply_choice(ChoiceEffect::UseItem(ItemId::MeditationGuide), &state, &env).unwrap();
        assert_eq!(next.inventory.quantity(ItemId::MeditationGuide), 1);
        assert_eq!(next.vitals, state.vitals);
        assert_eq!(
            next.dialogue.messages,
            vec!["Ancient wisdom for modern problems.".to_owned()]
        );
    }

    #[test]
    fn consumable_is_used() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::default();
        state.vitals.energy = Meter::new(50);
        state.inventory.items.insert(ItemId::Coffee, 1);

        let next = apply_choice(ChoiceEffect::UseItem(ItemId::Coffee), &state, &env).unwrap();
        assert_eq!(next.vitals.energy.value(), 80);
        assert!(next.inventory.is_empty());
        assert_eq!(next.dialogue.messages, vec!["Used Coffee!".to_owned()]);
    }

    #[test]
    fn event_already_attended_today_is_refused() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::default();
        state.completed_events.insert(EventId::Daily);

        let next = apply_choice(ChoiceEffect::JoinEvent(EventId::Daily), &state, &env).unwrap();
        assert_eq!(next.vitals, state.vitals);
        assert_eq!(next.progression, state.progression);
        assert_eq!(next.clock, state.clock);
        assert_eq!(
            next.dialogue.messages,
            vec![
                "You've already attended the Daily Standup today.".to_owned(),
                "Come back tomorrow for more Scrum events.".to_owned(),
            ]
        );
    }

    #[test]
    fn bar_chat_trades_energy_for_awareness() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::default();
        state.clock = Clock::new(1, TimeOfDay::Evening);

        let next = apply_choice(ChoiceEffect::BarChat, &state, &env).unwrap();
        assert_eq!(next.vitals.energy.value(), 90);
        assert_eq!(next.vitals.awareness.value(), 10);
        assert_eq!(next.vitals.health, state.vitals.health);
        assert_eq!(next.clock, Clock::new(1, TimeOfDay::Night));
        assert_eq!(
            next.dialogue.messages,
            vec![
                "Interesting discussion about the latest tech trends!".to_owned(),
                "Time passes... It's now night.".to_owned(),
            ]
        );
    }
}
