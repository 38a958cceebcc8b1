use std::fmt;

/// Phase of the day. Every stat-changing action moves the clock one phase.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TimeOfDay {
    #[default]
    Morning,
    Noon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Returns the phase that follows this one in the fixed daily cycle.
    pub const fn next(self) -> Self {
        match self {
            Self::Morning => Self::Noon,
            Self::Noon => Self::Evening,
            Self::Evening => Self::Night,
            Self::Night => Self::Morning,
        }
    }
}

/// Calendar position of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clock {
    pub day: u32,
    pub time_of_day: TimeOfDay,
}

impl Clock {
    pub const fn new(day: u32, time_of_day: TimeOfDay) -> Self {
        Self { day, time_of_day }
    }

    /// Moves the clock one phase forward.
    ///
    /// Returns `true` when the step wrapped around to a new morning.
    pub fn advance(&mut self) -> bool {
        self.time_of_day = self.time_of_day.next();
        let wrapped = self.time_of_day == TimeOfDay::Morning;
        if wrapped {
            self.day += 1;
        }
        wrapped
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(1, TimeOfDay::Morning)
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} ({})", self.day, self.time_of_day)
    }
}
