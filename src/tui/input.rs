//! Key mapping and cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_history::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0 / older moves.
    Up,
    /// Towards the last row / newer moves.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor in the focused panel.
    Navigate(Direction),
    /// Place on the cursor cell, or jump to the selected move.
    Activate,
    /// Switch focus between the board and the move list.
    ToggleFocus,
    /// Start a new game.
    NewGame,
    /// Place on the cell numbered `n` (1-based).
    PlaceNumbered(usize),
    /// Leave the application.
    Quit,
}

/// Maps a key code to an action; unmapped keys yield `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up => Some(Action::Navigate(Direction::Up)),
        KeyCode::Down => Some(Action::Navigate(Direction::Down)),
        KeyCode::Left => Some(Action::Navigate(Direction::Left)),
        KeyCode::Right => Some(Action::Navigate(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| *d >= 1)
            .map(|d| Action::PlaceNumbered(d as usize)),
        _ => None,
    }
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction, size: usize) -> Position {
    let last = size.saturating_sub(1);
    match direction {
        Direction::Up => Position::new(cursor.row.saturating_sub(1), cursor.col),
        Direction::Down => Position::new((cursor.row + 1).min(last), cursor.col),
        Direction::Left => Position::new(cursor.row, cursor.col.saturating_sub(1)),
        Direction::Right => Position::new(cursor.row, (cursor.col + 1).min(last)),
    }
}

/// Moves the move-list selection one entry, stopping at the ends.
pub fn move_selection(selected: usize, direction: Direction, len: usize) -> usize {
    match direction {
        Direction::Up | Direction::Left => selected.saturating_sub(1),
        Direction::Down | Direction::Right => (selected + 1).min(len.saturating_sub(1)),
    }
}
