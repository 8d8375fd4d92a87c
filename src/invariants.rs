//! First-class invariants over engine state.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are checked in debug builds after every accepted
//! move and can be tested independently.

use crate::engine::Game;
use crate::types::{Cell, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: mark counts stay balanced.
///
/// O moves first, so the board holds either equally many O and X marks
/// or exactly one more O.
pub struct MarkCountInvariant;

impl Invariant<Game> for MarkCountInvariant {
    fn holds(game: &Game) -> bool {
        let o_count = count_marks(game, Player::O);
        let x_count = count_marks(game, Player::X);

        let valid = o_count == x_count || o_count == x_count + 1;
        if !valid {
            warn!(o_count, x_count, "mark count balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "O holds equally many marks as X, or exactly one more"
    }
}

fn count_marks(game: &Game, player: Player) -> usize {
    game.board()
        .cells()
        .iter()
        .filter(|cell| **cell == Cell::Occupied(player))
        .count()
}

/// Invariant: players alternate turns.
///
/// History must show O, X, O, X, ... and the engine's current turn must
/// agree with the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Game::STARTING_PLAYER
        {
            return false;
        }

        for pair in history.windows(2) {
            if pair[0].player == pair[1].player {
                return false;
            }
        }

        let expected_next = if history.len() % 2 == 0 {
            Game::STARTING_PLAYER
        } else {
            Game::STARTING_PLAYER.opponent()
        };

        game.current_turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (O, X, O, X, ...)"
    }
}

/// Asserts that all engine invariants hold (panics on violation in
/// debug builds).
pub fn assert_invariants(game: &Game) {
    debug_assert!(
        MarkCountInvariant::holds(game),
        "{}",
        MarkCountInvariant::description()
    );
    debug_assert!(
        AlternatingTurnInvariant::holds(game),
        "{}",
        AlternatingTurnInvariant::description()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;

    #[test]
    fn test_invariants_hold_for_fresh_game() {
        let game = Game::new();
        assert!(MarkCountInvariant::holds(&game));
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut game = Game::new();
        for (x, y) in [(1, 1), (0, 0), (2, 0)] {
            assert!(game.request_move(x, y));
        }
        assert!(MarkCountInvariant::holds(&game));
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_mark_count_detects_corruption() {
        let mut game = Game::new();
        game.request_move(1, 1);
        // Corrupt the board with a second O out of turn.
        game.board.set(0, 0, Cell::Occupied(Player::O)).unwrap();
        game.board.set(2, 2, Cell::Occupied(Player::O)).unwrap();
        assert!(!MarkCountInvariant::holds(&game));
    }

    #[test]
    fn test_alternation_detects_wrong_starter() {
        let mut game = Game::new();
        game.request_move(1, 1);
        game.history[0] = Move::new(Player::X, 1, 1);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_alternation_detects_double_move() {
        let mut game = Game::new();
        game.request_move(1, 1);
        game.request_move(0, 0);
        game.history[1] = Move::new(Player::O, 0, 0);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_alternation_detects_stale_turn() {
        let mut game = Game::new();
        game.request_move(1, 1);
        game.current_turn = Player::O;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
