//! Game engine: history, turn order, move application and time-travel.

use super::action::{EngineError, Move, MoveError};
use super::contracts::{Contract, JumpContract, MoveContract};
use super::invariants::{GameInvariants, InvariantSet};
use super::state::GameState;
use super::types::BoardSize;
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine owning one session's [`GameState`].
///
/// Transitions are computed as new states, checked against their contract,
/// and committed only when the postconditions hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new engine with an empty N×N board; Player 1 opens.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            state: GameState::new(size),
        }
    }

    /// Replays a sequence of moves from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move's error.
    #[instrument]
    pub fn replay(size: BoardSize, moves: &[usize]) -> Result<Self, MoveError> {
        let mut engine = Self::new(size);
        for index in moves {
            engine.try_apply_move(*index)?;
        }
        Ok(engine)
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the next player's mark at `index`.
    ///
    /// Out-of-range indices, occupied squares and won boards are rejected
    /// silently: the unchanged state is returned.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn apply_move(&mut self, index: usize) -> &GameState {
        if let Err(error) = self.try_apply_move(index) {
            debug!(%error, "Move rejected");
        }
        &self.state
    }

    /// Places the next player's mark at `index`, reporting rejections.
    ///
    /// Any redo branch past the current step is discarded.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index >= N²`
    /// - [`MoveError::GameLocked`] if the displayed board is won
    /// - [`MoveError::SquareOccupied`] if the square is taken
    /// - [`MoveError::InvariantViolation`] if the result breaks an invariant
    #[instrument(skip(self), fields(step = self.state.current_step(), player = ?self.state.next_player()))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<&GameState, MoveError> {
        let mov = Move::new(self.state.next_player(), index);
        MoveContract::pre(&self.state, &mov)?;

        let next = self.state.placed(mov);
        MoveContract::post(&self.state, &next)?;

        info!(
            %mov,
            step = next.current_step(),
            outcome = %next.outcome(),
            "Move applied"
        );
        self.state = next;
        Ok(&self.state)
    }

    /// Moves the displayed board to `step` without truncating history.
    ///
    /// The next player follows step parity and the outcome is cleared, so
    /// the board accepts a move even if `step` shows a completed line.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] if `step >= history.len()`.
    #[instrument(skip(self), fields(len = self.state.history().len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<&GameState, EngineError> {
        JumpContract::pre(&self.state, &step)?;

        let next = self.state.rewound(step);
        JumpContract::post(&self.state, &next)?;

        info!(step, next_player = %next.next_player(), "Jumped");
        self.state = next;
        Ok(&self.state)
    }

    /// Starts a new game; the player who would have moved next sits out
    /// the first move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        let next = self.state.restarted();
        debug_assert!(GameInvariants::check_all(&next).is_ok());
        info!(opening = %next.opening_player(), "Game reset");
        self.state = next;
        &self.state
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(BoardSize::CLASSIC)
    }
}
