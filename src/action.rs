//! First-class move records.
//!
//! Accepted moves are kept as plain data: they can be logged, serialized,
//! and replayed against the invariant checks independently of the engine.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// An accepted move: a player's mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who made the move.
    pub player: Player,
    /// Column of the placed mark (0-2).
    pub x: u8,
    /// Row of the placed mark (0-2).
    pub y: u8,
}

impl Move {
    /// Creates a new move record.
    pub fn new(player: Player, x: u8, y: u8) -> Self {
        Self { player, x, y }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.x, self.y)
    }
}
