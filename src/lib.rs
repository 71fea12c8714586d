//! N×N tic-tac-toe with move history and time-travel.
//!
//! # Architecture
//!
//! - **Engine**: board history, turn order, win/draw detection and
//!   time-travel, guarded by contracts and invariants
//! - **Presentation**: view model (status line, cells, move list) and event
//!   forwarding for any front end
//! - **Config**: board size and player names, loaded from TOML
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameConfig, PresentationAdapter, UiEvent};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut adapter = PresentationAdapter::new(GameConfig::default())?;
//! for index in [0, 4, 1, 5, 2] {
//!     adapter.dispatch(UiEvent::CellClicked(index))?;
//! }
//! assert_eq!(adapter.view().status, "Gagnant: Arthur");
//!
//! // Rewinding unlocks the board.
//! let view = adapter.dispatch(UiEvent::HistoryClicked(0))?;
//! assert_eq!(view.status, "Joueur suivant: Arthur");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod presentation;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Engine
pub use games::tictactoe::{
    Board, BoardSize, EngineError, GameEngine, GameState, History, Line, LineKind, Move,
    MoveError, Outcome, Player, Position, Snapshot, Square, detect_outcome,
};

// Crate-level exports - Contracts and invariants
pub use games::tictactoe::invariants;
pub use games::tictactoe::rules;
pub use games::tictactoe::{
    BoardNotLocked, CellInBounds, Contract, GameInvariants, Invariant, InvariantSet,
    InvariantViolation, JumpContract, LegalMove, MoveContract, SquareIsEmpty,
};

// Crate-level exports - Presentation
pub use presentation::{
    CellView, EventParseError, GameView, HistoryEntry, NEW_GAME_LABEL, PresentationAdapter,
    UiEvent, history_label, status_text,
};
