//! Terminal tic-tac-toe built on `tictactoe_core`.
//!
//! # Architecture
//!
//! - **Session**: explicit game context (board, turn, mode, history)
//! - **Players**: humans reading lines, or the minimax engine
//! - **Orchestrator**: alternates players and renders each position
//! - **Config**: TOML settings with command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod render;
mod session;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use orchestrator::Orchestrator;
pub use players::{EnginePlayer, HumanPlayer, Player, SharedInput, shared_input};
pub use render::{analysis, analysis_json, best_move_line, render_board, result_line, turn_line};
pub use session::{GameMode, GameSession, MoveError};
