//! View model built from a game state.

use crate::config::GameConfig;
use crate::games::tictactoe::{GameState, Outcome, Player, Square};
use derive_new::new;
use serde::Serialize;
use tracing::instrument;

/// Label of the button that starts a new game.
pub const NEW_GAME_LABEL: &str = "Start new game";

/// One board cell as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct CellView {
    /// Row-major index, the value a click forwards.
    pub index: usize,
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
    /// Content of the square.
    pub square: Square,
    /// Accepts a click: empty square on an unlocked board.
    pub clickable: bool,
    /// Part of the winning line.
    pub highlighted: bool,
}

impl CellView {
    /// Text drawn in the cell: the player's mark or a blank.
    pub fn symbol(&self) -> char {
        match self.square {
            Square::Empty => ' ',
            Square::Occupied(player) => player.mark(),
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct HistoryEntry {
    /// Step a click jumps to.
    pub step: usize,
    /// "Go to game start" or "Go to move #k".
    pub label: String,
    /// The displayed step.
    pub is_current: bool,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Board side length.
    pub size: usize,
    /// N×N cells, row-major.
    pub cells: Vec<CellView>,
    /// Status line.
    pub status: String,
    /// Move list, oldest first.
    pub history: Vec<HistoryEntry>,
    /// Label of the new-game button.
    pub new_game_label: &'static str,
}

impl GameView {
    /// Builds the view for `state`, naming players from `config`.
    #[instrument(skip_all, fields(step = state.current_step()))]
    pub fn from_state(state: &GameState, config: &GameConfig) -> Self {
        let size = state.size().get();
        let locked = state.is_locked();
        let line = state.outcome().line();

        let cells = state
            .current_board()
            .squares()
            .iter()
            .enumerate()
            .map(|(index, square)| {
                CellView::new(
                    index,
                    index / size,
                    index % size,
                    *square,
                    !locked && *square == Square::Empty,
                    line.is_some_and(|line| line.contains(index)),
                )
            })
            .collect();

        let history = state
            .history()
            .snapshots()
            .iter()
            .map(|snapshot| {
                let step = snapshot.step();
                HistoryEntry::new(step, history_label(step), step == state.current_step())
            })
            .collect();

        Self {
            size,
            cells,
            status: status_text(state.outcome(), state.next_player(), config),
            history,
            new_game_label: NEW_GAME_LABEL,
        }
    }

    /// Cell at a row and column.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellView> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col)
    }

    /// Indices of the highlighted (winning) cells.
    pub fn highlighted(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|cell| cell.highlighted)
            .map(|cell| cell.index)
            .collect()
    }

    /// Plain-text rendering: status, grid, move list.
    ///
    /// Winning cells are wrapped in brackets, the current move is starred.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.status);
        out.push('\n');
        for row in self.cells.chunks(self.size.max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| {
                    let symbol = match cell.square {
                        Square::Empty => '.',
                        Square::Occupied(player) => player.mark(),
                    };
                    if cell.highlighted {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect();
            out.push_str(&line.join(""));
            out.push('\n');
        }
        for entry in &self.history {
            let marker = if entry.is_current { '*' } else { ' ' };
            out.push_str(&format!("{} {}. {}\n", marker, entry.step, entry.label));
        }
        out
    }
}

/// Status line for an outcome and the next player.
#[instrument(skip(config))]
pub fn status_text(outcome: &Outcome, next_player: Player, config: &GameConfig) -> String {
    match outcome {
        Outcome::Win { winner, .. } => format!("Gagnant: {}", config.player_name(*winner)),
        Outcome::Draw => "Match nul !!!".to_string(),
        Outcome::None => format!("Joueur suivant: {}", config.player_name(next_player)),
    }
}

/// Move list label for a step.
pub fn history_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{BoardSize, GameEngine};

    #[test]
    fn test_history_labels() {
        assert_eq!(history_label(0), "Go to game start");
        assert_eq!(history_label(1), "Go to move #1");
        assert_eq!(history_label(12), "Go to move #12");
    }

    #[test]
    fn test_status_texts() {
        let config = GameConfig::default();
        assert_eq!(
            status_text(&Outcome::None, Player::Player2, &config),
            "Joueur suivant: Flavien"
        );
        assert_eq!(
            status_text(&Outcome::Draw, Player::Player1, &config),
            "Match nul !!!"
        );
    }

    #[test]
    fn test_win_view_highlights_and_locks() {
        let engine = GameEngine::replay(BoardSize::CLASSIC, &[0, 4, 1, 5, 2]).unwrap();
        let view = GameView::from_state(engine.state(), &GameConfig::default());

        assert_eq!(view.status, "Gagnant: Arthur");
        assert_eq!(view.highlighted(), vec![0, 1, 2]);
        assert!(view.cells.iter().all(|cell| !cell.clickable));
        assert_eq!(view.history.len(), 6);
        assert!(view.history[5].is_current);
    }

    #[test]
    fn test_render_text() {
        let engine = GameEngine::replay(BoardSize::CLASSIC, &[4]).unwrap();
        let view = GameView::from_state(engine.state(), &GameConfig::default());
        let text = view.render_text();
        assert!(text.starts_with("Joueur suivant: Flavien\n"));
        assert!(text.contains(" .  X  . \n"));
        assert!(text.contains("* 1. Go to move #1"));
    }

    #[test]
    fn test_cell_lookup() {
        let view = GameView::from_state(&GameState::default(), &GameConfig::default());
        assert_eq!(view.cell(1, 2).map(|c| c.index), Some(5));
        assert!(view.cell(3, 0).is_none());
        assert_eq!(view.cell(0, 0).map(CellView::symbol), Some(' '));
    }
}
