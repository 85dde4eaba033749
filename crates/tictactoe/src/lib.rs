//! Tic-tac-toe game state manager.
//!
//! Pure, synchronous game logic: a 3x3 [`Board`], alternating [`Mark`]s,
//! win/draw detection and reset. Renderers read [`GameSnapshot`]s and
//! forward cell indices to [`Game::attempt_move`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameStatus, Mark};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.attempt_move(index);
//! }
//! assert_eq!(game.status().winner(), Some(Mark::X));
//! assert_eq!(game.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
//!
//! game.reset();
//! assert_eq!(game.status(), &GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod status;
mod types;

pub use game::{Game, GameSnapshot, MoveOutcome, Rejection};
pub use position::Position;
pub use rules::{UnknownLine, WinningLine};
pub use status::GameStatus;
pub use types::{Board, Mark, Square};
