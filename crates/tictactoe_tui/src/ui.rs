//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Board, GameSnapshot, GameStatus, Mark, Position, Square};

use crate::app::App;
use crate::config::Theme;

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions, top to bottom.
struct Regions {
    title: Rect,
    status: Rect,
    board: Rect,
    description: Rect,
    footer: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    Regions {
        title: chunks[0],
        status: chunks[1],
        board: center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT),
        description: chunks[3],
        footer: chunks[4],
    }
}

/// The status line: `Turn: X`, `Winner: O` or `It's a Draw!`.
pub fn status_message(snapshot: &GameSnapshot) -> String {
    match snapshot.status() {
        GameStatus::InProgress => format!("Turn: {}", snapshot.turn()),
        GameStatus::Won { mark, .. } => format!("Winner: {}", mark),
        GameStatus::Draw => "It's a Draw!".to_string(),
    }
}

/// Screen-reader style description of a cell, numbered from 1.
pub fn cell_description(board: &Board, pos: Position) -> String {
    match board.get(pos) {
        Square::Empty => format!("Cell {}, empty", pos.to_index() + 1),
        Square::Occupied(mark) => format!("Cell {}, filled by {}", pos.to_index() + 1, mark),
    }
}

/// Rects of the 9 cells, row-major, for a frame of the given area.
pub fn board_cells(area: Rect) -> [Rect; 9] {
    let board = regions(area).board;
    let rows = grid_rows(board);
    let mut cells = [Rect::default(); 9];
    for (r, row) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = grid_cols(row);
        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = cell;
        }
    }
    cells
}

/// Index of the cell at screen coordinate `(x, y)`, if any.
pub fn cell_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    board_cells(area)
        .iter()
        .position(|cell| cell.contains(ratatui::layout::Position::new(x, y)))
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();
    let theme = app.theme();
    let area = frame.area();
    let regions = regions(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, regions.title);

    let status_style = match snapshot.status() {
        GameStatus::InProgress => Style::default().fg(theme.primary),
        _ => Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    };
    let status = Paragraph::new(status_message(&snapshot))
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, regions.status);

    draw_grid_lines(frame, regions.board, theme);
    for (pos, cell) in Position::ALL.into_iter().zip(board_cells(area)) {
        draw_cell(frame, cell, app, &snapshot, pos);
    }

    let description = Paragraph::new(cell_description(snapshot.board(), app.cursor()))
        .style(Style::default().fg(theme.muted))
        .alignment(Alignment::Center);
    frame.render_widget(description, regions.description);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("1-9", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" / arrows + enter: play  "),
        Span::styled("r", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": reset  "),
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(theme.muted))
    .alignment(Alignment::Center);
    frame.render_widget(footer, regions.footer);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, snapshot: &GameSnapshot, pos: Position) {
    let theme = app.theme();
    let square = snapshot.board().get(pos);
    let game_over = snapshot.status().is_terminal();
    let winning = snapshot
        .status()
        .winning_line()
        .is_some_and(|line| line.contains(pos));

    let (symbol, mut style) = match square {
        Square::Empty if app.show_cell_numbers() && !game_over => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(theme.muted),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(mark) => (
            mark.to_string(),
            Style::default()
                .fg(mark_color(theme, mark))
                .add_modifier(Modifier::BOLD),
        ),
    };

    // Filled cells and everything after the game ends no longer accept moves.
    let disabled = square != Square::Empty || game_over;

    if winning {
        style = style.bg(theme.accent).fg(theme.secondary);
    } else {
        if !game_over && pos == app.cursor() {
            let bg = if disabled { theme.muted } else { theme.primary };
            style = style.bg(bg).fg(theme.secondary);
        }
        if disabled {
            style = style.add_modifier(Modifier::DIM);
        }
    }

    let mut lines = vec![Line::default(); CELL_HEIGHT as usize];
    lines[CELL_HEIGHT as usize / 2] = Line::from(symbol);
    let paragraph = Paragraph::new(Text::from(lines))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_color(theme: &Theme, mark: Mark) -> ratatui::style::Color {
    match mark {
        Mark::X => theme.primary,
        Mark::O => theme.accent,
    }
}

fn draw_grid_lines(frame: &mut Frame, board: Rect, theme: &Theme) {
    let style = Style::default().fg(theme.muted);
    let rows = grid_rows(board);

    let horizontal = format!("{0}┼{0}┼{0}", "─".repeat(CELL_WIDTH as usize));
    for sep in [rows[1], rows[3]] {
        frame.render_widget(Paragraph::new(horizontal.as_str()).style(style), sep);
    }

    for row in [rows[0], rows[2], rows[4]] {
        let cols = grid_cols(row);
        for sep in [cols[1], cols[3]] {
            let bar = vec![Line::from("│"); CELL_HEIGHT as usize];
            frame.render_widget(Paragraph::new(Text::from(bar)).style(style), sep);
        }
    }
}

fn grid_rows(board: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board)
}

fn grid_cols(row: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(row)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
