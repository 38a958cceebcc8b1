//! Pure stat/time transition applied by every activity.

use crate::config::GameConfig;
use crate::state::GameState;

/// Non-negative stat changes requested by an activity.
///
/// Costs and gains are kept apart: a health bonus is `health_gain`, never a
/// negative `health_cost`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatDelta {
    pub energy_cost: u32,
    pub health_cost: u32,
    pub health_gain: u32,
    pub exp_gain: u32,
    pub awareness_gain: u32,
}

impl StatDelta {
    pub const fn new() -> Self {
        Self {
            energy_cost: 0,
            health_cost: 0,
            health_gain: 0,
            exp_gain: 0,
            awareness_gain: 0,
        }
    }

    #[must_use]
    pub const fn energy_cost(mut self, amount: u32) -> Self {
        self.energy_cost = amount;
        self
    }

    #[must_use]
    pub const fn health_cost(mut self, amount: u32) -> Self {
        self.health_cost = amount;
        self
    }

    #[must_use]
    pub const fn health_gain(mut self, amount: u32) -> Self {
        self.health_gain = amount;
        self
    }

    #[must_use]
    pub const fn exp_gain(mut self, amount: u32) -> Self {
        self.exp_gain = amount;
        self
    }

    #[must_use]
    pub const fn awareness_gain(mut self, amount: u32) -> Self {
        self.awareness_gain = amount;
        self
    }

    /// A work session at the workstation.
    pub const fn work_session() -> Self {
        Self::new()
            .energy_cost(GameConfig::WORK_ENERGY_COST)
            .awareness_gain(GameConfig::WORK_AWARENESS_GAIN)
    }

    /// A quick workout with the trainer.
    pub const fn workout() -> Self {
        Self::new()
            .energy_cost(GameConfig::WORKOUT_ENERGY_COST)
            .health_gain(GameConfig::WORKOUT_HEALTH_GAIN)
            .awareness_gain(GameConfig::WORKOUT_AWARENESS_GAIN)
    }

    /// A tech chat at the bar.
    pub const fn bar_chat() -> Self {
        Self::new()
            .energy_cost(GameConfig::BAR_CHAT_ENERGY_COST)
            .awareness_gain(GameConfig::BAR_CHAT_AWARENESS_GAIN)
    }
}

/// Applies stat deltas, leveling and the time-of-day step.
pub struct TransitionEngine;

impl TransitionEngine {
    /// Returns the state after `delta`. The input is never mutated.
    ///
    /// Time always moves one phase forward. Wrapping to morning starts a new
    /// day and clears the scrum events attended the day before.
    pub fn apply(state: &GameState, delta: &StatDelta) -> GameState {
        let mut next = state.clone();

        let vitals = &mut next.vitals;
        vitals.energy = vitals.energy.saturating_sub(delta.energy_cost);
        vitals.health = vitals
            .health
            .saturating_sub(delta.health_cost)
            .saturating_add(delta.health_gain);
        vitals.awareness = vitals.awareness.saturating_add(delta.awareness_gain);

        next.progression.gain(delta.exp_gain);

        if next.clock.advance() {
            next.completed_events.clear();
        }

        next
    }
}
