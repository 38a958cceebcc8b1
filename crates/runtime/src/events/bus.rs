//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{DialogueEvent, GameStateEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Snapshot replacements, ignored and failed commands
    GameState,
    /// Reveal ticker start/stop
    Dialogue,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    GameState(GameStateEvent),
    Dialogue(DialogueEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::GameState(_) => Topic::GameState,
            Event::Dialogue(_) => Topic::Dialogue,
        }
    }
}

/// Topic-based event bus
///
/// Each topic owns its own broadcast channel, so a slow dialogue subscriber
/// never lags the game state stream.
#[derive(Clone)]
pub struct EventBus {
    game_state: broadcast::Sender<Event>,
    dialogue: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            game_state: broadcast::channel(capacity).0,
            dialogue: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::GameState => &self.game_state,
            Topic::Dialogue => &self.dialogue,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(4);
        let mut state_rx = bus.subscribe(Topic::GameState);
        let mut dialogue_rx = bus.subscribe(Topic::Dialogue);

        bus.publish(Event::Dialogue(DialogueEvent::RevealStopped));

        let event = dialogue_rx.recv().await.unwrap();
        assert_eq!(event.topic(), Topic::Dialogue);
        assert!(state_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        let bus = EventBus::default();
        bus.publish(Event::Dialogue(DialogueEvent::RevealStopped));
    }
}
