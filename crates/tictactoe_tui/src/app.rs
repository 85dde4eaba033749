//! Application state and logic.

use ratatui::layout::Rect;
use tictactoe::{Game, GameSnapshot, MoveOutcome, Position};
use tracing::{debug, instrument};

use crate::config::Theme;
use crate::input::{Action, move_cursor};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    theme: Theme,
    show_cell_numbers: bool,
    viewport: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(theme: Theme, show_cell_numbers: bool) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            theme,
            show_cell_numbers,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// Handles one user action to completion.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Select(index) => self.select(index),
            Action::SelectCursor => self.select(self.cursor.to_index()),
            Action::MoveCursor(step) => {
                self.cursor = move_cursor(self.cursor, step);
            }
            Action::Reset => self.game.reset(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn select(&mut self, index: usize) {
        if let MoveOutcome::Placed { position, .. } = self.game.attempt_move(index) {
            debug!(%position, "Move applied");
            self.cursor = position;
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// State the renderer draws from.
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Colours in use.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether empty cells show their digit.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Area of the last drawn frame.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Records the area of the frame just drawn, for mouse hit testing.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default(), true)
    }
}
