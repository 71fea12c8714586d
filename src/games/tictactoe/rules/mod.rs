//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage and from the engine so contracts and tests can use them directly.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{Outcome, detect_outcome};
pub use win::{Line, LineKind, check_winner, find_winning_line, winning_lines};
