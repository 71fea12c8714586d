//! Contract-based validation for engine transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{EngineError, Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet, describe};
use super::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Error reported when either side of the contract fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Self::Error>;
}

/// Runs the full invariant set, flattening violations to one message.
#[instrument(skip(state))]
fn invariants_hold(state: &GameState) -> Result<(), String> {
    GameInvariants::check_all(state).map_err(|violations| {
        let message = describe(&violations);
        warn!(%message, "Postcondition failed");
        format!("Postcondition failed: {}", message)
    })
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The index must be a cell of the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Checks the move index against the board size.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        let cells = game.size().cells();
        if mov.index < cells {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                index: mov.index,
                cells,
            })
        }
    }
}

/// Precondition: No winning line is on the displayed board.
pub struct BoardNotLocked;

impl BoardNotLocked {
    /// Rejects moves while the outcome is a win.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.is_locked() {
            Err(MoveError::GameLocked)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's index must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied squares.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.current_board().is_empty(mov.index) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.index))
        }
    }
}

/// Composite precondition: in bounds, not locked, empty square.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        CellInBounds::check(mov, game)?;
        BoardNotLocked::check(mov, game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Contracts (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: legal move (see [`LegalMove`]).
/// Postconditions: the new snapshot was placed by the player who was next,
/// the turn passed to the opponent, and every invariant in
/// [`GameInvariants`] holds.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    type Error = MoveError;

    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let due = before.next_player();
        let placed_by = after.current_snapshot().placed().map(|mov| mov.player);
        if placed_by != Some(due) || after.next_player() != due.opponent() {
            return Err(MoveError::InvariantViolation(format!(
                "Move must be made by {} and pass the turn",
                due
            )));
        }
        invariants_hold(after).map_err(MoveError::InvariantViolation)
    }
}

/// Contract for time-travel.
///
/// Precondition: the step exists in the history.
/// Postconditions: every invariant holds and the history is untouched.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    type Error = EngineError;

    fn pre(game: &GameState, step: &usize) -> Result<(), EngineError> {
        let len = game.history().len();
        if *step < len {
            Ok(())
        } else {
            Err(EngineError::StepOutOfRange { step: *step, len })
        }
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), EngineError> {
        if before.history() != after.history() {
            return Err(EngineError::InvariantViolation(
                "Time-travel must not modify history".to_string(),
            ));
        }
        invariants_hold(after).map_err(EngineError::InvariantViolation)
    }
}
