//! Player stats: clamped meters and the leveling counters.

use crate::config::GameConfig;

/// A stat value confined to `0..=STAT_MAX`.
///
/// All arithmetic saturates at the bounds, so a meter can never leave its
/// range no matter which delta is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meter(u8);

impl Meter {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(GameConfig::STAT_MAX);

    /// Creates a meter, clamping the value into range.
    pub fn new(value: u32) -> Self {
        Self(value.min(GameConfig::STAT_MAX as u32) as u8)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn saturating_sub(self, amount: u32) -> Self {
        Self::new((self.0 as u32).saturating_sub(amount))
    }

    #[must_use]
    pub fn saturating_add(self, amount: u32) -> Self {
        Self::new((self.0 as u32).saturating_add(amount))
    }

    /// Applies a signed change (item effects may be negative).
    #[must_use]
    pub fn offset(self, delta: i32) -> Self {
        if delta >= 0 {
            self.saturating_add(delta as u32)
        } else {
            self.saturating_sub(delta.unsigned_abs())
        }
    }
}

impl core::fmt::Display for Meter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Health, energy and awareness of the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    pub health: Meter,
    pub energy: Meter,
    pub awareness: Meter,
}

impl Vitals {
    pub const fn new(health: Meter, energy: Meter, awareness: Meter) -> Self {
        Self {
            health,
            energy,
            awareness,
        }
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self::new(Meter::MAX, Meter::MAX, Meter::MIN)
    }
}

/// Level and experience counters.
///
/// Invariant: `exp < next_level_exp` and `level >= 1` after every call to
/// [`Progression::gain`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    pub level: u32,
    pub exp: u32,
    pub next_level_exp: u32,
}

impl Progression {
    pub const fn new(level: u32, exp: u32, next_level_exp: u32) -> Self {
        Self {
            level,
            exp,
            next_level_exp,
        }
    }

    /// Adds experience and levels up as many times as it covers.
    ///
    /// Returns the number of levels gained.
    pub fn gain(&mut self, amount: u32) -> u32 {
        self.exp = self.exp.saturating_add(amount);
        let mut gained = 0;
        while self.exp >= self.next_level_exp {
            self.level += 1;
            self.exp -= self.next_level_exp;
            self.next_level_exp = GameConfig::next_threshold(self.next_level_exp).max(1);
            gained += 1;
        }
        gained
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new(1, 0, GameConfig::INITIAL_NEXT_LEVEL_EXP)
    }
}
