//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// The 8 possible lines as row-major cell indices, in evaluation order:
/// columns, then rows, then the two diagonals.
#[rustfmt::skip]
const LINES: [[usize; 3]; 8] = [
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks the board for a complete line.
///
/// Scans the columns, then the rows, then the two diagonals, and returns
/// the owner of the first line whose three cells hold the same mark.
/// Returns `None` if no line is complete.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        let cell = cells[a];
        if cell != Cell::Empty && cell == cells[b] && cell == cells[c] {
            return cell.player();
        }
    }
    None
}
