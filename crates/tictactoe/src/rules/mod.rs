//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The [`Game`](crate::Game)
//! manager calls these after every accepted move.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{UnknownLine, WinningLine, check_winner};
