/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of distinct item ids the inventory can hold.
    pub inventory_slots: u16,
    /// Delay between two revealed characters of a dialogue message.
    pub reveal_cadence_ms: u64,
}

impl GameConfig {
    // ===== stat model =====
    /// Upper bound of health, energy and awareness.
    pub const STAT_MAX: u8 = 100;
    pub const INITIAL_NEXT_LEVEL_EXP: u32 = 100;
    /// Level threshold growth, applied as `next * NUM / DEN` (floor).
    pub const LEVEL_CURVE_NUM: u32 = 3;
    pub const LEVEL_CURVE_DEN: u32 = 2;

    // ===== tasks =====
    pub const TASK_COMPLETE: u8 = 100;
    pub const WORK_PROGRESS_STEP: u8 = 25;
    pub const WORK_ENERGY_COST: u32 = 20;
    pub const WORK_AWARENESS_GAIN: u32 = 5;

    // ===== npc activities =====
    pub const SCRUM_AWARENESS_GAIN: u32 = 5;
    pub const WORKOUT_ENERGY_COST: u32 = 30;
    pub const WORKOUT_HEALTH_GAIN: u32 = 20;
    pub const WORKOUT_AWARENESS_GAIN: u32 = 5;
    pub const BAR_CHAT_ENERGY_COST: u32 = 10;
    pub const BAR_CHAT_AWARENESS_GAIN: u32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INVENTORY_SLOTS: u16 = 10;
    pub const DEFAULT_REVEAL_CADENCE_MS: u64 = 30;

    pub fn new() -> Self {
        Self {
            inventory_slots: Self::DEFAULT_INVENTORY_SLOTS,
            reveal_cadence_ms: Self::DEFAULT_REVEAL_CADENCE_MS,
        }
    }

    pub fn with_inventory_slots(mut self, inventory_slots: u16) -> Self {
        self.inventory_slots = inventory_slots;
        self
    }

    pub fn with_reveal_cadence_ms(mut self, reveal_cadence_ms: u64) -> Self {
        self.reveal_cadence_ms = reveal_cadence_ms;
        self
    }

    /// Applies the leveling curve to a level threshold.
    pub const fn next_threshold(current: u32) -> u32 {
        current.saturating_mul(Self::LEVEL_CURVE_NUM) / Self::LEVEL_CURVE_DEN
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
