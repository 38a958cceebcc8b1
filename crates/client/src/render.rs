//! Plain-text views of a snapshot.
use game_core::{CatalogSnapshot, DialoguePhase, GameState, LocationOracle, TaskOracle};

/// One-line HUD: clock, place, level and meters, current task.
pub fn status_line(state: &GameState, catalog: &CatalogSnapshot) -> String {
    let place = catalog
        .location(state.location)
        .map(|location| location.name.clone())
        .unwrap_or_else(|| state.location.to_string());

    let task = match state.task.current {
        Some(id) => {
            let title = catalog
                .task(id)
                .map(|task| task.title.clone())
                .unwrap_or_else(|| id.to_string());
            format!("{title} {}%", state.task.progress)
        }
        None => "none".to_owned(),
    };

    format!(
        "Day {} {} | {} | Lv {} ({}/{} exp) | HP {} EN {} AW {} | Task: {}",
        state.clock.day,
        state.time_of_day(),
        place,
        state.progression.level,
        state.progression.exp,
        state.progression.next_level_exp,
        state.vitals.health.value(),
        state.vitals.energy.value(),
        state.vitals.awareness.value(),
        task,
    )
}

/// What the player can do once the current message is fully shown.
pub fn dialogue_footer(state: &GameState) -> Option<String> {
    let dialogue = &state.dialogue;
    match dialogue.phase {
        DialoguePhase::Closed => None,
        DialoguePhase::Revealing => Some("(type `skip` to show the whole message)".to_owned()),
        DialoguePhase::AwaitingAdvance => Some("(type `next` to continue)".to_owned()),
        DialoguePhase::AwaitingChoice => Some(
            dialogue
                .current_choices()
                .iter()
                .enumerate()
                .map(|(index, choice)| format!("  {}) {}", index + 1, choice.text))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    }
}

/// Characters of the current message revealed past `printed`.
pub fn revealed_since(state: &GameState, printed: usize) -> String {
    state.dialogue.visible_text().chars().skip(printed).collect()
}
