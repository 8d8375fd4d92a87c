//! Game notification events and listener registration.
//!
//! The engine broadcasts every state change as a [`GameEvent`] to a list
//! of registered listeners, invoked in registration order. Front-ends
//! subscribe to render boards, flip status indicators, or log games;
//! the engine itself never touches any UI state.

use crate::engine::Outcome;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Notification emitted by the engine after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was accepted and the mark placed.
    Moved {
        /// Column of the placed mark.
        x: u8,
        /// Row of the placed mark.
        y: u8,
        /// The player who moved.
        player: Player,
    },
    /// The turn passed to the next player.
    TurnChanged {
        /// The player to move next.
        next: Player,
    },
    /// The game reached a terminal outcome.
    Completed {
        /// How the game ended.
        outcome: Outcome,
    },
    /// The engine returned to a fresh game.
    Reset,
}

/// Ordered list of registered event listeners.
#[derive(Default)]
pub(crate) struct Listeners {
    subscribers: Vec<Box<dyn FnMut(&GameEvent)>>,
}

impl Listeners {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Appends a listener; delivery order follows registration order.
    pub(crate) fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.subscribers.push(Box::new(listener));
    }

    /// Delivers an event to every listener, in registration order.
    pub(crate) fn emit(&mut self, event: &GameEvent) {
        for listener in &mut self.subscribers {
            listener(event);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.subscribers.len())
            .finish()
    }
}
