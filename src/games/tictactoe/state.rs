//! Game state and its pure transitions.
//!
//! Every transition takes `&GameState` and builds a new `GameState`; nothing
//! here validates input. [`GameEngine`](super::GameEngine) checks contracts
//! before and after and decides whether to commit.

use super::action::Move;
use super::history::{History, Snapshot};
use super::rules::{Outcome, detect_outcome};
use super::types::{Board, BoardSize, Player, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// Complete game state: history, cursor into it, turn and outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
    current_step: usize,
    next_player: Player,
    opening_player: Player,
    outcome: Outcome,
}

impl GameState {
    /// A fresh game opened by Player 1.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self::with_opening(size, Player::Player1)
    }

    /// A fresh game opened by the given player.
    #[instrument]
    pub fn with_opening(size: BoardSize, opening_player: Player) -> Self {
        Self {
            history: History::new(size),
            current_step: 0,
            next_player: opening_player,
            opening_player,
            outcome: Outcome::None,
        }
    }

    /// All snapshots, including any redo branch past `current_step`.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Player who opened this history; `reset` hands the opening to the
    /// other side.
    pub fn opening_player(&self) -> Player {
        self.opening_player
    }

    /// Outcome of the displayed board (cleared by time-travel).
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Board side length.
    pub fn size(&self) -> BoardSize {
        self.current_board().size()
    }

    /// The displayed snapshot.
    pub fn current_snapshot(&self) -> &Snapshot {
        // current_step < history.len() holds for every state built here.
        &self.history.snapshots()[self.current_step]
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// A won board accepts no moves until `jump_to` or `reset`.
    pub fn is_locked(&self) -> bool {
        self.outcome.is_win()
    }

    /// Player due after a jump to `step`: Player 1 on even steps, Player 2
    /// on odd steps, whoever opened the current history.
    pub fn player_for_step(step: usize) -> Player {
        if step % 2 == 0 {
            Player::Player1
        } else {
            Player::Player2
        }
    }

    /// Places `mov` on the displayed board, discarding any redo branch.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub(crate) fn placed(&self, mov: Move) -> GameState {
        let mut history = self.history.clone();
        history.truncate_after(self.current_step);

        let mut board = self.current_board().clone();
        board.set(mov.index, Square::Occupied(mov.player));
        let outcome = detect_outcome(&board);
        let current_step = history.push(board, mov);

        GameState {
            history,
            current_step,
            next_player: mov.player.opponent(),
            opening_player: self.opening_player,
            outcome,
        }
    }

    /// Moves the cursor to `step`, keeping the whole history.
    ///
    /// The next player follows step parity and the outcome is cleared even
    /// when the board at `step` is won, so the board unlocks after any rewind.
    #[instrument(skip(self))]
    pub(crate) fn rewound(&self, step: usize) -> GameState {
        let mut next = self.clone();
        next.current_step = step;
        next.next_player = Self::player_for_step(step);
        next.outcome = Outcome::None;
        if let Some(snapshot) = self.history.get(step)
            && detect_outcome(snapshot.board()).is_win()
        {
            debug!(step, "Rewound onto a won board; outcome cleared");
        }
        next
    }

    /// A fresh history opened by the opponent of the current next player.
    #[instrument(skip(self))]
    pub(crate) fn restarted(&self) -> GameState {
        GameState::with_opening(self.size(), self.next_player.opponent())
    }
}

#[cfg(test)]
impl GameState {
    pub(crate) fn with_next_player(mut self, player: Player) -> Self {
        self.next_player = player;
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoardSize::CLASSIC)
    }
}
