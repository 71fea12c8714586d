//! First-class action and error types.
//!
//! Moves are domain events, not side effects. They record which player
//! placed a mark where, and can be validated independently of execution.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark at a row-major board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Row-major index of the target cell.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// Reason a move was rejected.
///
/// [`GameEngine::apply_move`](super::GameEngine::apply_move) swallows these;
/// [`GameEngine::try_apply_move`](super::GameEngine::try_apply_move) reports them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not a cell of the board.
    #[display("Cell {} is out of bounds (board has {} cells)", index, cells)]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The square at the index is already occupied.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(usize),

    /// A winning line is on the board; the game is locked.
    #[display("Game is already won")]
    GameLocked,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Errors surfaced by engine operations other than moves.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// `jump_to` received a step outside the history.
    #[display("Step {} is out of range (history has {} snapshots)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// Board side length outside the supported range.
    #[display("Board size {} is not supported", _0)]
    InvalidBoardSize(usize),

    /// Square count does not match the board size.
    #[display("Board needs {} squares, got {}", expected, actual)]
    BoardShape {
        /// N² for the requested size.
        expected: usize,
        /// Squares supplied.
        actual: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
