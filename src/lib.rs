//! Event-driven tic-tac-toe game engine.
//!
//! The engine owns a 3x3 board and the game status, validates incoming
//! move requests, detects completed lines, and broadcasts every state
//! change to registered listeners. Front-ends feed coordinates in and
//! render the events they receive; a console front-end ships as the
//! `play` binary.
//!
//! # Architecture
//!
//! - **Types**: board, cells, and players ([`Board`], [`Cell`], [`Player`])
//! - **Rules**: pure legality, win, and draw checks ([`is_legal`],
//!   [`find_winner`], [`is_full`])
//! - **Engine**: the sole board mutator ([`Game`])
//! - **Events**: listener broadcast of state changes ([`GameEvent`])
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameEvent};
//!
//! let mut game = Game::new();
//! game.subscribe(|event| {
//!     if let GameEvent::Completed { outcome } = event {
//!         println!("{outcome}");
//!     }
//! });
//!
//! game.request_move(1, 1); // O takes the center
//! assert!(!game.request_move(1, 1)); // occupied - silently ignored
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod events;
mod invariants;
mod rules;
mod types;

// Crate-level exports - move records
pub use action::Move;

// Crate-level exports - engine
pub use engine::{Game, Outcome, Phase};

// Crate-level exports - events
pub use events::GameEvent;

// Crate-level exports - invariants
pub use invariants::{AlternatingTurnInvariant, Invariant, MarkCountInvariant, assert_invariants};

// Crate-level exports - rules
pub use rules::{find_winner, is_full, is_legal};

// Crate-level exports - domain types
pub use types::{BOARD_SIZE, Board, BoardError, Cell, Player};
