//! Game state manager for tic-tac-toe.
//!
//! [`Game`] owns the board, the turn and the status. Moves that break the
//! rules are not errors: they leave the state untouched and report a
//! [`Rejection`] that callers are free to ignore.

use crate::position::Position;
use crate::rules::{WinningLine, check_winner, is_draw};
use crate::status::GameStatus;
use crate::types::{Board, Mark, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The index does not name a cell.
    #[display("Index {} is outside the board", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Result of [`Game::attempt_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was written.
    Placed {
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
        /// Status after the move.
        status: GameStatus,
    },
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move was applied.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Immutable copy of the game state for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSnapshot {
    /// The board.
    board: Board,
    /// Mark to move (frozen once the game ends).
    turn: Mark,
    /// Game status.
    status: GameStatus,
}

/// Tic-tac-toe game state manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Mark,
    status: GameStatus,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    /// Attempts to mark the cell at `index` (0-8) for the current turn.
    ///
    /// Out-of-range indices, occupied cells and finished games leave the
    /// state untouched.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn attempt_move(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.place(pos),
            None => self.reject(Rejection::OutOfRange(index)),
        }
    }

    /// Attempts to mark `pos` for the current turn.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        if self.status.is_terminal() {
            return self.reject(Rejection::GameOver);
        }
        if !self.board.is_empty(pos) {
            return self.reject(Rejection::Occupied(pos));
        }

        let mark = self.turn;
        self.board.set(pos, Square::Occupied(mark));
        self.update_status(mark);

        MoveOutcome::Placed {
            mark,
            position: pos,
            status: self.status,
        }
    }

    fn update_status(&mut self, mark: Mark) {
        if let Some((winner, line)) = check_winner(&self.board) {
            info!(
                %winner,
                line = ?line.indices(),
                board = %self.board.display(),
                "Game won"
            );
            self.status = GameStatus::Won { mark: winner, line };
        } else if is_draw(&self.board) {
            info!(board = %self.board.display(), "Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.turn = mark.opponent();
        }
    }

    fn reject(&self, reason: Rejection) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Rejected(reason)
    }

    /// Starts over: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the winning line once the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status.winning_line()
    }

    /// Copies out the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            turn: self.turn,
            status: self.status,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
