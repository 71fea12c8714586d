mod action;
mod contracts;
mod game;
mod history;
mod position;
mod state;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{EngineError, Move, MoveError};
pub use contracts::{
    BoardNotLocked, CellInBounds, Contract, JumpContract, LegalMove, MoveContract, SquareIsEmpty,
};
pub use game::GameEngine;
pub use history::{History, Snapshot};
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::Position;
pub use rules::{Line, LineKind, Outcome, detect_outcome};
pub use state::GameState;
pub use types::{Board, BoardSize, Player, Square};
