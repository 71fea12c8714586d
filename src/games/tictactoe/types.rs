//! Core domain types for N×N tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::action::EngineError;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Player {
    /// First player (plays `X`, opens a fresh game).
    #[strum(to_string = "Player 1")]
    Player1,
    /// Second player (plays `O`).
    #[strum(to_string = "Player 2")]
    Player2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Mark drawn on the board for this player.
    pub fn mark(self) -> char {
        match self {
            Player::Player1 => 'X',
            Player::Player2 => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Side length of a square board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
#[display("{}", _0)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest supported side length.
    pub const MIN: usize = 1;
    /// Largest supported side length.
    pub const MAX: usize = 10;
    /// The classic 3×3 game.
    pub const CLASSIC: BoardSize = BoardSize(3);

    /// Validates a side length.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] outside `MIN..=MAX`.
    #[instrument]
    pub fn new(n: usize) -> Result<Self, EngineError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(EngineError::InvalidBoardSize(n))
        }
    }

    /// Side length N.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells, N².
    pub fn cells(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = EngineError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// N×N board, squares stored row-major: `cell(r, c) = r * N + c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an all-empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()],
        }
    }

    /// Builds a board from row-major squares.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BoardShape`] when the square count is not N².
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(size: BoardSize, squares: Vec<Square>) -> Result<Self, EngineError> {
        if squares.len() != size.cells() {
            return Err(EngineError::BoardShape {
                expected: size.cells(),
                actual: squares.len(),
            });
        }
        Ok(Self { size, squares })
    }

    /// Side length of the board.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the square at a row-major index, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares, row-major.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Indices of the empty squares, ascending.
    pub fn available_moves(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|square| **square != Square::Empty)
            .count()
    }

    /// Sets a square. Callers check bounds first.
    pub(crate) fn set(&mut self, index: usize, square: Square) {
        if let Some(slot) = self.squares.get_mut(index) {
            *slot = square;
        }
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show `.`, rows are separated by newlines.
    pub fn render(&self) -> String {
        let n = self.size.get();
        let mut result = String::new();
        for (index, square) in self.squares.iter().enumerate() {
            let symbol = match square {
                Square::Empty => '.',
                Square::Occupied(player) => player.mark(),
            };
            result.push(symbol);
            if index % n < n - 1 {
                result.push(' ');
            } else if index + 1 < self.squares.len() {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::CLASSIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_bounds() {
        assert!(BoardSize::new(0).is_err());
        assert_eq!(BoardSize::new(1).map(BoardSize::get), Ok(1));
        assert_eq!(BoardSize::new(10).map(BoardSize::cells), Ok(100));
        assert_eq!(BoardSize::new(11), Err(EngineError::InvalidBoardSize(11)));
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(BoardSize::new(4).unwrap());
        assert_eq!(board.squares().len(), 16);
        assert_eq!(board.available_moves().len(), 16);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::default();
        assert_eq!(board.get(8), Some(Square::Empty));
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_from_squares_rejects_wrong_shape() {
        let result = Board::from_squares(BoardSize::CLASSIC, vec![Square::Empty; 4]);
        assert_eq!(
            result,
            Err(EngineError::BoardShape {
                expected: 9,
                actual: 4
            })
        );
    }

    #[test]
    fn test_render() {
        let mut board = Board::default();
        board.set(0, Square::Occupied(Player::Player1));
        board.set(4, Square::Occupied(Player::Player2));
        assert_eq!(board.render(), "X . .\n. O .\n. . .");
    }

    #[test]
    fn test_opponent_and_marks() {
        assert_eq!(Player::Player1.opponent(), Player::Player2);
        assert_eq!(Player::Player2.opponent(), Player::Player1);
        assert_eq!(Player::Player1.mark(), 'X');
        assert_eq!(Player::Player2.to_string(), "Player 2");
    }
}
