//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the 8 fixed triples that win the game.
///
/// Serialized as its three board indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]", into = "[usize; 3]")]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// All lines in evaluation order: rows top to bottom, columns left to
    /// right, then the two diagonals.
    pub const ALL: [WinningLine; 8] = [
        // Rows
        WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        WinningLine([
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ]),
        WinningLine([
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ]),
        // Columns
        WinningLine([
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ]),
        WinningLine([
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ]),
        WinningLine([
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ]),
        // Diagonals
        WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
        WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` is one of the three cells of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The mark owning all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.mark()
        } else {
            None
        }
    }
}

/// Index triple that is not one of the 8 winning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{:?} is not a winning line", indices)]
pub struct UnknownLine {
    /// The rejected indices.
    pub indices: [usize; 3],
}

impl TryFrom<[usize; 3]> for WinningLine {
    type Error = UnknownLine;

    fn try_from(indices: [usize; 3]) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|line| line.indices() == indices)
            .ok_or(UnknownLine { indices })
    }
}

impl From<WinningLine> for [usize; 3] {
    fn from(line: WinningLine) -> Self {
        line.indices()
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`WinningLine::ALL`] order and the first complete
/// line is reported, so a move closing two lines at once reports the
/// earlier one.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    WinningLine::ALL
        .into_iter()
        .find_map(|line| line.owner(board).map(|mark| (mark, line)))
}
