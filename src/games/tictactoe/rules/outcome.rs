//! Board evaluation: win, draw, or still open.

use super::super::{Board, Player};
use super::win::{Line, find_winning_line, has_empty};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No completed line and at least one empty square (or display cleared).
    #[default]
    None,
    /// A player completed a line.
    Win {
        /// Owner of the line.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// Full board, no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::None | Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<&Line> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            Outcome::None | Outcome::Draw => None,
        }
    }

    /// True for `Win`; a won board accepts no moves.
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win { .. })
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::None => write!(f, "In progress"),
            Outcome::Win { winner, line } => write!(f, "{} wins on {:?}", winner, line.kind()),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board.
///
/// The first completed line in enumeration order wins; otherwise a board
/// with no empty square is a draw.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn detect_outcome(board: &Board) -> Outcome {
    if let Some((winner, line)) = find_winning_line(board) {
        return Outcome::Win { winner, line };
    }
    if has_empty(board) {
        Outcome::None
    } else {
        Outcome::Draw
    }
}
