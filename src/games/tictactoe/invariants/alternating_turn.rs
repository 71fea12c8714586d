//! Alternating turn invariant: the next player follows the last move or
//! the step parity.

use super::super::GameState;
use super::Invariant;

/// Invariant: `next_player` is one the game could have produced.
///
/// After a move, the opponent of whoever placed the displayed snapshot is
/// next. After a jump, step parity decides (Player 1 on even steps). On the
/// origin board the opening player may also be next. Who placed each move
/// is a transition property checked by
/// [`MoveContract`](super::super::MoveContract).
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let next = game.next_player();
        if next == GameState::player_for_step(game.current_step()) {
            return true;
        }
        match game.current_snapshot().placed() {
            Some(mov) => next == mov.player.opponent(),
            None => next == game.opening_player(),
        }
    }

    fn description() -> &'static str {
        "Next player follows the last move or the step parity"
    }
}
