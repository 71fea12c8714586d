//! Stateless UI rendering for the board, status line and move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_history::{CellView, Player, Square};

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 5;
const HISTORY_WIDTH: u16 = 28;
const HELP: &str = "←↑↓→ move  Enter play/jump  Tab switch panel  1-9 place  n new game  q quit";

/// Renders the whole screen from the current view.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(HISTORY_WIDTH)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app);

    let status = match app.notice() {
        Some(notice) => format!("{}  ({})", app.view().status, notice),
        None => app.view().status.clone(),
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.view();
    let n = view.size as u16;
    let width = n * CELL_WIDTH + n.saturating_sub(1) + 2;
    let height = n * 2 + 1;
    let board_area = center_rect(area, width, height);

    let separator = vec![String::from("─").repeat(CELL_WIDTH as usize); view.size].join("┼");
    let mut lines = Vec::with_capacity(view.size * 2);
    for row in 0..view.size {
        if row > 0 {
            lines.push(Line::styled(
                separator.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let mut spans = Vec::with_capacity(view.size * 2);
        for col in 0..view.size {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            if let Some(cell) = view.cell(row, col) {
                let focused = app.focus() == Focus::Board
                    && app.cursor().row == row
                    && app.cursor().col == col;
                spans.push(cell_span(cell, focused));
            }
        }
        lines.push(Line::from(spans));
    }

    let border_style = match app.focus() {
        Focus::Board => Style::default().fg(Color::White),
        Focus::History => Style::default().fg(Color::DarkGray),
    };
    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(board, board_area);
}

fn cell_span(cell: &CellView, focused: bool) -> Span<'static> {
    let base_style = match cell.square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::Player1) => {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        }
        Square::Occupied(Player::Player2) => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
    };
    let style = if focused {
        base_style.bg(Color::White).fg(Color::Black)
    } else if cell.highlighted {
        base_style.bg(Color::Green)
    } else {
        base_style
    };
    let symbol = match cell.square {
        Square::Empty => ' ',
        Square::Occupied(player) => player.mark(),
    };
    Span::styled(format!("  {symbol}  "), style)
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.view();
    let items: Vec<ListItem> = view
        .history
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(entry.label.clone(), style))
        })
        .collect();

    let border_style = match app.focus() {
        Focus::History => Style::default().fg(Color::White),
        Focus::Board => Style::default().fg(Color::DarkGray),
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title("Moves")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected_step()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
