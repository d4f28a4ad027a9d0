//! Typed game-lifecycle events
//!
//! A closed set of payload-free signals decouples collision detection
//! from the session's phase transitions and from external listeners.

use std::collections::VecDeque;
use std::fmt;

/// Game-lifecycle signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The score goal was crossed
    ScoreReached,
    /// The player picked up the key
    KeyObtained,
    /// An enemy caught the player
    PlayerDied,
    /// The player reached the gate
    EpicWin,
}

impl GameEvent {
    /// Wire name for external listeners
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::ScoreReached => "score-reached",
            GameEvent::KeyObtained => "key-obtained",
            GameEvent::PlayerDied => "player-died",
            GameEvent::EpicWin => "epic-win",
        }
    }
}

type Subscriber = Box<dyn FnMut(GameEvent)>;

/// In-process publish/subscribe channel for [`GameEvent`]s.
///
/// External subscribers run synchronously inside [`EventBus::publish`],
/// in registration order. Every published event is also queued for the
/// session, which drains the queue once per tick to run its own phase
/// reactions after the frame's entity updates are done.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
    queue: VecDeque<GameEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. Registration order is invocation order.
    pub fn subscribe(&mut self, subscriber: impl FnMut(GameEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Notify every subscriber, then queue the event for the session
    pub fn publish(&mut self, event: GameEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
        self.queue.push_back(event);
    }

    /// Take everything published since the last drain, in publish order
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.queue.drain(..).collect()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .field("queue", &self.queue)
            .finish()
    }
}
