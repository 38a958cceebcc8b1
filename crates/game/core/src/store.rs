//! The single mutable cell of a session.

use std::sync::Arc;

use crate::state::GameState;

/// Owns the current snapshot.
///
/// Readers receive cheap `Arc` clones that stay valid after later
/// replacements. The version counts replacements and lets observers detect
/// missed notifications.
#[derive(Clone, Debug)]
pub struct StateStore {
    current: Arc<GameState>,
    version: u64,
}

impl StateStore {
    pub fn new(initial: GameState) -> Self {
        Self {
            current: Arc::new(initial),
            version: 0,
        }
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.current)
    }

    pub fn current(&self) -> &GameState {
        &self.current
    }

    /// Swaps in a new snapshot and returns the new version.
    pub fn replace(&mut self, next: GameState) -> u64 {
        self.current = Arc::new(next);
        self.version += 1;
        self.version
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(GameState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LocationId;

    #[test]
    fn old_snapshots_survive_replacement() {
        let mut store = StateStore::default();
        let before = store.snapshot();

        let mut next = GameState::default();
        next.location = LocationId::Gym;
        assert_eq!(store.replace(next), 1);

        assert_eq!(before.location, LocationId::Home);
        assert_eq!(store.current().location, LocationId::Gym);
    }
}
