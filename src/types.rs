//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 3;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes second).
    X,
    /// Player O (goes first).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player places on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Occupied(player) => Some(player),
            Cell::Empty => None,
        }
    }
}

/// Errors from direct board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("coordinates ({}, {}) are outside the board", _0, _1)]
    OutOfBounds(u8, u8),

    /// The target cell already holds a mark.
    #[display("cell ({}, {}) is already occupied", _0, _1)]
    CellOccupied(u8, u8),
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe board.
///
/// Once a cell is occupied it stays occupied until [`Board::reset_all`]
/// clears the whole grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (index `y * 3 + x`).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    fn index(x: u8, y: u8) -> usize {
        (y as usize) * (BOARD_SIZE as usize) + (x as usize)
    }

    /// Checks whether the coordinates fall on the board.
    pub fn in_bounds(x: u8, y: u8) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE
    }

    /// Gets the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if either coordinate exceeds 2.
    pub fn get(&self, x: u8, y: u8) -> Result<Cell, BoardError> {
        if !Self::in_bounds(x, y) {
            return Err(BoardError::OutOfBounds(x, y));
        }
        Ok(self.cells[Self::index(x, y)])
    }

    /// Sets the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates off the grid and
    /// [`BoardError::CellOccupied`] if the target cell is not empty. Cells
    /// are never overwritten; only [`Board::reset_all`] clears them.
    pub fn set(&mut self, x: u8, y: u8, cell: Cell) -> Result<(), BoardError> {
        if !Self::in_bounds(x, y) {
            return Err(BoardError::OutOfBounds(x, y));
        }
        let index = Self::index(x, y);
        if self.cells[index] != Cell::Empty {
            return Err(BoardError::CellOccupied(x, y));
        }
        self.cells[index] = cell;
        Ok(())
    }

    /// Clears every cell back to empty.
    pub fn reset_all(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Checks if the cell at `(x, y)` is on the board and empty.
    pub fn is_empty_at(&self, x: u8, y: u8) -> bool {
        matches!(self.get(x, y), Ok(Cell::Empty))
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(u8, u8)> {
        let mut empty = Vec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if self.is_empty_at(x, y) {
                    empty.push((x, y));
                }
            }
        }
        empty
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let symbol = match self.cells[Self::index(x, y)] {
                    Cell::Empty => '.',
                    Cell::Occupied(player) => player.symbol(),
                };
                write!(f, "{}", symbol)?;
                if x < BOARD_SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if y < BOARD_SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                assert_eq!(board.get(x, y), Ok(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_set_then_get() {
        let mut board = Board::new();
        board.set(1, 2, Cell::Occupied(Player::O)).unwrap();
        assert_eq!(board.get(1, 2), Ok(Cell::Occupied(Player::O)));
        assert_eq!(board.get(2, 1), Ok(Cell::Empty));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.get(3, 0), Err(BoardError::OutOfBounds(3, 0)));
        assert_eq!(board.get(0, 3), Err(BoardError::OutOfBounds(0, 3)));
        assert_eq!(
            board.set(3, 3, Cell::Occupied(Player::X)),
            Err(BoardError::OutOfBounds(3, 3))
        );
    }

    #[test]
    fn test_no_silent_overwrite() {
        let mut board = Board::new();
        board.set(0, 0, Cell::Occupied(Player::X)).unwrap();
        assert_eq!(
            board.set(0, 0, Cell::Occupied(Player::O)),
            Err(BoardError::CellOccupied(0, 0))
        );
        assert_eq!(
            board.set(0, 0, Cell::Empty),
            Err(BoardError::CellOccupied(0, 0))
        );
        assert_eq!(board.get(0, 0), Ok(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_reset_all_clears_every_cell() {
        let mut board = Board::new();
        board.set(0, 0, Cell::Occupied(Player::X)).unwrap();
        board.set(2, 2, Cell::Occupied(Player::O)).unwrap();
        board.reset_all();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                assert_eq!(board.get(x, y), Ok(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_empty_cells_shrinks_as_marks_land() {
        let mut board = Board::new();
        assert_eq!(board.empty_cells().len(), 9);
        board.set(1, 1, Cell::Occupied(Player::O)).unwrap();
        let empty = board.empty_cells();
        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&(1, 1)));
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.set(0, 0, Cell::Occupied(Player::O)).unwrap();
        board.set(2, 1, Cell::Occupied(Player::X)).unwrap();
        assert_eq!(board.to_string(), "O|.|.\n-+-+-\n.|.|X\n-+-+-\n.|.|.");
    }
}
