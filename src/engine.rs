//! The turn engine: phase tracking, turn alternation, and event emission.

use crate::action::Move;
use crate::events::{GameEvent, Listeners};
use crate::invariants::assert_invariants;
use crate::rules;
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Engine-level game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The game accepts moves.
    Active,
    /// The game reached a terminal outcome; move requests are ignored
    /// until [`Game::reset`].
    Complete,
}

/// Outcome of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Player),
    /// The board filled with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Tic-tac-toe turn engine.
///
/// Owns the board and is its sole mutator. Front-ends feed coordinates
/// into [`Game::request_move`] and receive [`GameEvent`]s through
/// listeners registered with [`Game::subscribe`]; the engine holds no
/// reference to any UI state.
///
/// Illegal move requests (occupied cell, off-board coordinates, game
/// already complete) are silently ignored, matching a UI where clicking
/// a filled tile simply does nothing.
#[derive(Debug)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_turn: Player,
    pub(crate) phase: Phase,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) history: Vec<Move>,
    listeners: Listeners,
}

impl Game {
    /// The player who moves first in a fresh game.
    pub const STARTING_PLAYER: Player = Player::O;

    /// Creates a new game with an empty board, ready for the starting
    /// player.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Self::STARTING_PLAYER,
            phase: Phase::Active,
            outcome: None,
            history: Vec::new(),
            listeners: Listeners::new(),
        }
    }

    /// Registers a listener for game events.
    ///
    /// Listeners are invoked synchronously for every event, in
    /// registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.listeners.subscribe(listener);
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is next.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Returns the game phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome of a completed game.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the winner, if a player completed a line.
    ///
    /// `None` while the game is active and on a draw.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.and_then(|outcome| outcome.winner())
    }

    /// Returns the accepted moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Requests a move at `(x, y)` for the player whose turn it is.
    ///
    /// Returns `true` if the move was accepted. An illegal request -
    /// wrong phase, off-board coordinates, or an occupied cell - changes
    /// nothing and returns `false`; callers that only forward clicks may
    /// ignore the return value.
    ///
    /// An accepted move emits [`GameEvent::Moved`], then exactly one of
    /// [`GameEvent::Completed`] (line completed, or board full) or
    /// [`GameEvent::TurnChanged`].
    #[instrument(skip(self), fields(player = ?self.current_turn, phase = ?self.phase))]
    pub fn request_move(&mut self, x: u8, y: u8) -> bool {
        if !rules::is_legal(&self.board, x, y, self.phase) {
            return false;
        }

        let player = self.current_turn;
        if self.board.set(x, y, Cell::Occupied(player)).is_err() {
            // Unreachable after is_legal; refuse rather than corrupt state.
            warn!(x, y, "board rejected a validated move");
            return false;
        }
        self.history.push(Move::new(player, x, y));
        self.listeners.emit(&GameEvent::Moved { x, y, player });

        // The turn flips even on a completing move.
        self.current_turn = player.opponent();
        assert_invariants(self);

        if let Some(winner) = rules::find_winner(&self.board) {
            self.complete(Outcome::Winner(winner));
        } else if rules::is_full(&self.board) {
            self.complete(Outcome::Draw);
        } else {
            self.listeners.emit(&GameEvent::TurnChanged {
                next: self.current_turn,
            });
        }

        true
    }

    fn complete(&mut self, outcome: Outcome) {
        self.phase = Phase::Complete;
        self.outcome = Some(outcome);
        self.listeners.emit(&GameEvent::Completed { outcome });
    }

    /// Resets to a fresh game: empty board, starting player's turn,
    /// active phase. Valid in any phase; emits [`GameEvent::Reset`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset_all();
        self.current_turn = Self::STARTING_PLAYER;
        self.phase = Phase::Active;
        self.outcome = None;
        self.history.clear();
        self.listeners.emit(&GameEvent::Reset);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
