//! Derived outcome invariant: the outcome comes from the displayed board.

use super::super::GameState;
use super::super::rules::{Outcome, detect_outcome};
use super::Invariant;

/// Invariant: the stored outcome is either cleared or exactly what the
/// displayed board evaluates to.
pub struct OutcomeDerivedInvariant;

impl Invariant<GameState> for OutcomeDerivedInvariant {
    fn holds(game: &GameState) -> bool {
        match game.outcome() {
            Outcome::None => true,
            outcome => *outcome == detect_outcome(game.current_board()),
        }
    }

    fn description() -> &'static str {
        "Outcome matches the displayed board"
    }
}
