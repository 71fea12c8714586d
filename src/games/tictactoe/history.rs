//! Board history for time-travel.

use super::action::Move;
use super::types::{Board, BoardSize};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One immutable board state and the step that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    step: usize,
    board: Board,
    placed: Option<Move>,
}

impl Snapshot {
    /// The all-empty snapshot at step 0.
    pub fn origin(size: BoardSize) -> Self {
        Self {
            step: 0,
            board: Board::new(size),
            placed: None,
        }
    }

    /// Move index that produced this board; 0 for the origin.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this board, `None` for the origin.
    pub fn placed(&self) -> Option<Move> {
        self.placed
    }
}

/// Ordered snapshots, append-only during forward play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// A history holding only the empty origin board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            snapshots: vec![Snapshot::origin(size)],
        }
    }

    /// Number of snapshots; never zero.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history keeps at least its origin.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at a step.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Drops every snapshot after `step`.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub(crate) fn truncate_after(&mut self, step: usize) {
        if step + 1 < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - step - 1,
                "Discarding redo branch"
            );
            self.snapshots.truncate(step + 1);
        }
    }

    /// Appends the board produced by `placed`, returning its step.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub(crate) fn push(&mut self, board: Board, placed: Move) -> usize {
        let step = self.snapshots.len();
        self.snapshots.push(Snapshot {
            step,
            board,
            placed: Some(placed),
        });
        step
    }
}
