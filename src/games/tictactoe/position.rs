//! Row/column coordinates on an N×N board.

use super::action::MoveError;
use super::types::{Board, BoardSize};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell position, zero-based row and column.
///
/// Engine operations take row-major indices; `Position` is the
/// two-dimensional view used by front ends for navigation and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Position {
    /// Creates a position without checking it against a board.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts position to a row-major board index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] when the position is off the board.
    #[instrument]
    pub fn to_index(self, size: BoardSize) -> Result<usize, MoveError> {
        let n = size.get();
        if self.row >= n || self.col >= n {
            return Err(MoveError::OutOfBounds {
                index: self.row.saturating_mul(n).saturating_add(self.col),
                cells: size.cells(),
            });
        }
        Ok(self.row * n + self.col)
    }

    /// Creates a position from a row-major board index.
    #[instrument]
    pub fn from_index(index: usize, size: BoardSize) -> Option<Self> {
        if index >= size.cells() {
            return None;
        }
        let n = size.get();
        Some(Self::new(index / n, index % n))
    }

    /// All positions of a board, row-major.
    pub fn all(size: BoardSize) -> impl Iterator<Item = Position> {
        let n = size.get();
        (0..size.cells()).map(move |index| Position::new(index / n, index % n))
    }

    /// Returns only the empty positions of the board.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::all(board.size())
            .filter(|pos| {
                pos.to_index(board.size())
                    .is_ok_and(|index| board.is_empty(index))
            })
            .collect()
    }

    /// Human-readable label, one-based ("row 1, column 3").
    pub fn label(&self) -> String {
        format!("row {}, column {}", self.row + 1, self.col + 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
