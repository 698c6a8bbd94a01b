//! Tic-tac-toe core: board state, rules, and the minimax decision engine.
//!
//! # Architecture
//!
//! - **Board**: the nine-cell mark array and pure queries over it
//! - **Rules**: terminal-state detection (win / draw / ongoing)
//! - **Search**: exhaustive minimax that picks the engine's move
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{best_move, Board, Mark, Position};
//!
//! let mut board: Board = "XX./OO./...".parse()?;
//! let choice = best_move(&mut board, Mark::X, Mark::O)?;
//! assert_eq!(choice, Some(Position::TopRight));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod position;
mod rules;
mod search;
mod types;

pub use board::{Board, BoardError};
pub use position::{CellIndex, Position};
pub use rules::{Outcome, WIN_LINES, check_winner, evaluate, is_draw, is_full, winning_line};
pub use search::{SearchError, SearchReport, ScoredMove, WIN_SCORE, analyze, best_move};
pub use types::{Cell, Mark};
