//! Monotonic board invariant: each step adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: the history grows one mark at a time from an empty board.
///
/// Snapshot 0 is all-empty. Every later snapshot differs from its
/// predecessor in exactly one square, which went from Empty to Occupied
/// by the player recorded for that step.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let snapshots = game.history().snapshots();
        let Some(origin) = snapshots.first() else {
            return false;
        };
        if origin.board().occupied_count() != 0 {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            if before.size() != after.size() {
                return false;
            }
            let changed: Vec<_> = before
                .squares()
                .iter()
                .zip(after.squares())
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .collect();
            match (changed.as_slice(), pair[1].placed()) {
                ([(index, (Square::Empty, Square::Occupied(player)))], Some(mov)) => {
                    *index == mov.index && *player == mov.player
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark to an empty square"
    }
}
