use super::{DialogueRequest, Immediate, Interaction, Resolution};
use crate::engine::ExecuteError;
use crate::env::GameEnv;
use crate::state::{GameState, LocationId};

/// Travel to another location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortalInteraction {
    pub destination: LocationId,
}

impl PortalInteraction {
    pub fn new(destination: LocationId) -> Self {
        Self { destination }
    }
}

impl Interaction for PortalInteraction {
    fn resolve(&self, state: &GameState, env: &GameEnv<'_>) -> Result<Resolution, ExecuteError> {
        let location = env.location(self.destination)?;
        let time = state.time_of_day();

        if self.destination == state.location {
            return Ok(Resolution::Refused(DialogueRequest::message([
                format!("You are already here at {}.", location.name),
                "Pick another destination to travel.".to_owned(),
            ])));
        }
        if !location.is_open_at(time) {
            return Ok(Resolution::Refused(DialogueRequest::message([
                format!("{} is not available at {time}!", location.name),
                "Try visiting at a different time.".to_owned(),
            ])));
        }

        Ok(Resolution::Applied {
            dialogue: DialogueRequest::message([
                format!("Welcome to {}!", location.name),
                location.description.clone(),
            ]),
            effect: Immediate::Travel(self.destination),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::{Clock, TimeOfDay};
    use crate::test_utils::catalog;

    #[test]
    fn closed_location_refuses_without_moving() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::default();
        state.clock = Clock::new(1, TimeOfDay::Morning);

        let resolution = PortalInteraction::new(LocationId::Bar)
            .resolve(&state, &env)
            .unwrap();

        assert!(resolution.is_refusal());
        assert_eq!(
            resolution.dialogue().messages[0],
            "Tech Bar is not available at morning!"
        );
        let next = resolution.into_state(&state).unwrap();
        assert_eq!(next.location, LocationId::Home);
        assert!(next.dialogue.is_open());
    }

    #[test]
    fn open_location_moves_player_and_welcomes() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let state = GameState::default();

        let next = PortalInteraction::new(LocationId::Office)
            .resolve(&state, &env)
            .unwrap()
            .into_state(&state)
            .unwrap();

        assert_eq!(next.location, LocationId::Office);
        assert_eq!(next.dialogue.messages[0], "Welcome to Office!");
        assert_eq!(next.time_of_day(), TimeOfDay::Morning);
    }

    #[test]
    fn travelling_to_current_location_is_refused() {
        let catalog = catalog();
        let env = GameEnv::from_catalog(&catalog, &PcgRng);
        let mut state = GameState::default();
        state.location = LocationId::Office;

        let resolution = PortalInteraction::new(LocationId::Office)
            .resolve(&state, &env)
            .unwrap();

        assert!(resolution.is_refusal());
        assert_eq!(
            resolution.dialogue().messages[0],
            "You are already here at Office."
        );
        let next = resolution.into_state(&state).unwrap();
        assert_eq!(next.location, LocationId::Office);
        assert_eq!(next.clock, state.clock);
    }
}
