//! History consistency invariant: snapshots are numbered and sized coherently.

use super::super::GameState;
use super::Invariant;

/// Invariant: snapshot k carries step k and holds k marks, and the cursor
/// points inside the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let snapshots = game.history().snapshots();
        let numbered = snapshots
            .iter()
            .enumerate()
            .all(|(k, snapshot)| snapshot.step() == k && snapshot.board().occupied_count() == k);

        numbered && game.current_step() < snapshots.len()
    }

    fn description() -> &'static str {
        "History steps are numbered in order and the cursor is in range"
    }
}
