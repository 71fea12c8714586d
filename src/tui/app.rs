//! Application state and logic.

use super::input::{Action, Direction, action_for, move_cursor, move_selection};
use crossterm::event::KeyCode;
use tictactoe_history::{
    ConfigError, GameConfig, GameView, Position, PresentationAdapter, UiEvent,
};
use tracing::{debug, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The board grid.
    Board,
    /// The move list.
    History,
}

/// Main application state.
pub struct App {
    adapter: PresentationAdapter,
    view: GameView,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    notice: Option<String>,
    quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let adapter = PresentationAdapter::new(config)?;
        let view = adapter.view();
        let center = view.size / 2;
        Ok(Self {
            adapter,
            view,
            cursor: Position::new(center, center),
            focus: Focus::Board,
            selected_step: 0,
            notice: None,
            quit: false,
        })
    }

    /// The view drawn this frame.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list entry.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// One-line feedback for the last action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the main loop should stop.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for(key) else {
            return;
        };
        debug!(?action, focus = ?self.focus, "Handling key");
        self.notice = None;

        match action {
            Action::Navigate(direction) => self.navigate(direction),
            Action::Activate => match self.focus {
                Focus::Board => {
                    let index = self.cursor.row * self.view.size + self.cursor.col;
                    self.click_cell(index);
                }
                Focus::History => self.dispatch(UiEvent::HistoryClicked(self.selected_step)),
            },
            Action::PlaceNumbered(n) => {
                if n <= self.view.cells.len() {
                    self.click_cell(n - 1);
                }
            }
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => {
                        self.selected_step = self.adapter.state().current_step();
                        Focus::History
                    }
                    Focus::History => Focus::Board,
                };
            }
            Action::NewGame => {
                self.dispatch(UiEvent::NewGame);
                self.selected_step = 0;
            }
            Action::Quit => self.quit = true,
        }
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction, self.view.size),
            Focus::History => {
                self.selected_step =
                    move_selection(self.selected_step, direction, self.view.history.len());
            }
        }
    }

    fn click_cell(&mut self, index: usize) {
        let available = self.view.cells.get(index).is_some_and(|cell| cell.clickable);
        self.dispatch(UiEvent::CellClicked(index));
        // A move after a rewind truncates the list under the selection.
        self.selected_step = self
            .selected_step
            .min(self.view.history.len().saturating_sub(1));
        if available {
            if let Some(position) = Position::from_index(index, self.adapter.state().size()) {
                self.cursor = position;
            }
        } else {
            self.notice = Some("That square is not available".to_string());
        }
    }

    fn dispatch(&mut self, event: UiEvent) {
        match self.adapter.dispatch(event) {
            Ok(view) => self.view = view,
            Err(e) => {
                warn!(error = %e, ?event, "Event rejected");
                self.notice = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(GameConfig::default()).unwrap()
    }

    #[test]
    fn test_cursor_starts_centered() {
        assert_eq!(app().cursor(), Position::new(1, 1));
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.view().cells[4].symbol(), 'X');
        assert_eq!(app.view().status, "Joueur suivant: Flavien");
    }

    #[test]
    fn test_occupied_square_sets_notice() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.notice(), Some("That square is not available"));
        assert_eq!(app.view().history.len(), 2);
    }

    #[test]
    fn test_history_jump_via_focus() {
        let mut app = app();
        for key in ['1', '4', '2'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected_step(), 3);

        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.view().history.len(), 4);
        assert!(app.view().history[1].is_current);
        assert_eq!(app.view().status, "Joueur suivant: Flavien");
    }

    #[test]
    fn test_selection_clamped_after_truncating_move() {
        let mut app = app();
        for key in ['1', '4', '2', '5'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.selected_step(), 4);

        // Rewind to move 1, then select the last entry again.
        for _ in 0..3 {
            app.handle_key(KeyCode::Up);
        }
        app.handle_key(KeyCode::Enter);
        for _ in 0..3 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.selected_step(), 4);

        // Placing truncates the list to three entries.
        app.handle_key(KeyCode::Char('9'));
        assert_eq!(app.view().history.len(), 3);
        assert_eq!(app.selected_step(), 2);

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.notice(), None);
        assert!(app.view().history[2].is_current);
    }

    #[test]
    fn test_new_game_and_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.view().history.len(), 1);
        assert_eq!(app.view().status, "Joueur suivant: Arthur");

        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
