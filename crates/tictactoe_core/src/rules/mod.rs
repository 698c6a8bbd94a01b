//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board as won, drawn, or still in play.
//! Rules are kept apart from board storage so the search engine and the
//! session layer share one terminal-state oracle.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, check_winner, winning_line};

use crate::{Board, Mark};

/// Result of evaluating a board. Exactly one holds for any board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Outcome {
    /// Some line is fully owned by this mark.
    #[display("{} wins", _0)]
    Win(Mark),
    /// No line owned and no empty cell left.
    #[display("Draw")]
    Draw,
    /// Everything else.
    #[display("Ongoing")]
    Ongoing,
}

impl Outcome {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }
}

/// Classifies a board.
///
/// Lines are scanned in [`WIN_LINES`] order and the first owned line wins.
/// Without a winner, a full board is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
