//! Maps terminal events to app actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tictactoe::Position;

use crate::ui;

/// Cursor step on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Mark the cell with this index (0-8).
    Select(usize),
    /// Mark the cell under the cursor.
    SelectCursor,
    /// Move the keyboard cursor.
    MoveCursor(CursorMove),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Moves cursor one step, staying put at the edges.
pub fn move_cursor(cursor: Position, step: CursorMove) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match step {
        CursorMove::Up => row.checked_sub(1).map(|r| (r, col)),
        CursorMove::Down => Some((row + 1, col)),
        CursorMove::Left => col.checked_sub(1).map(|c| (row, c)),
        CursorMove::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps a terminal event; `viewport` is the last drawn frame area, used to
/// resolve mouse clicks to cells.
pub fn map_event(event: &Event, viewport: Rect) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, viewport),
        _ => None,
    }
}

/// Maps a key press. Releases are ignored.
pub fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(CursorMove::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(CursorMove::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(CursorMove::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(CursorMove::Right)),
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Some(Action::Select(digit as usize - 1)),
            _ => None,
        },
        _ => None,
    }
}

/// Maps a left click on a board cell.
pub fn map_mouse(mouse: &MouseEvent, viewport: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            ui::cell_at(viewport, mouse.column, mouse.row).map(Action::Select)
        }
        _ => None,
    }
}
