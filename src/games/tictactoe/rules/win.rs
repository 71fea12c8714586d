//! Win detection logic for N×N tic-tac-toe.

use super::super::{Board, BoardSize, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which row, column or diagonal a line covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row `r`, left to right.
    Row(usize),
    /// Column `c`, top to bottom.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// A sequence of N cell indices that wins when uniformly occupied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    cells: Vec<usize>,
}

impl Line {
    /// Builds the line of the given kind on an N×N board.
    #[instrument]
    pub fn new(kind: LineKind, size: BoardSize) -> Self {
        let n = size.get();
        let cells = match kind {
            LineKind::Row(r) => (0..n).map(|c| r * n + c).collect(),
            LineKind::Column(c) => (0..n).map(|r| r * n + c).collect(),
            LineKind::Diagonal => (0..n).map(|i| i * n + i).collect(),
            LineKind::AntiDiagonal => (0..n).map(|i| i * n + (n - 1 - i)).collect(),
        };
        Self { kind, cells }
    }

    /// Row, column or diagonal.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Row-major cell indices, in line order.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Checks whether the line contains a cell.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    /// Returns the owner when every cell holds the same player.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let (first, rest) = self.cells.split_first()?;
        let square = board.get(*first)?;
        let player = square.player()?;
        rest.iter()
            .all(|index| board.get(*index) == Some(square))
            .then_some(player)
    }
}

/// Enumerates all 2N+2 winning lines.
///
/// Order: rows top to bottom, columns left to right, diagonal, anti-diagonal.
#[instrument]
pub fn winning_lines(size: BoardSize) -> Vec<Line> {
    let n = size.get();
    let rows = (0..n).map(LineKind::Row);
    let cols = (0..n).map(LineKind::Column);
    rows.chain(cols)
        .chain([LineKind::Diagonal, LineKind::AntiDiagonal])
        .map(|kind| Line::new(kind, size))
        .collect()
}

/// Returns the first completed line and its owner, in enumeration order.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Player, Line)> {
    winning_lines(board.size())
        .into_iter()
        .find_map(|line| line.owner(board).map(|player| (player, line)))
}

/// Checks if there is a winner on the board.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|(player, _)| player)
}

/// Whether any square of the board is still empty.
pub(crate) fn has_empty(board: &Board) -> bool {
    board.squares().contains(&Square::Empty)
}
