//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_cli::{DEFAULT_CONFIG_FILE, GameMode};
use tictactoe_core::{Board, Mark};

/// Tic-tac-toe against a friend or an engine that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Game mode (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<GameMode>,

        /// Your mark against the engine: x moves first
        #[arg(long)]
        human_mark: Option<Mark>,

        /// Pause before each engine move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Print the engine's move for a position
    BestMove {
        /// Board in compact notation, e.g. "XO./.X./..O"
        #[arg(long)]
        board: Board,

        /// Mark the engine plays
        #[arg(long)]
        mark: Mark,
    },

    /// Print the minimax score of every legal move
    Analyze {
        /// Board in compact notation, e.g. "XO./.X./..O"
        #[arg(long)]
        board: Board,

        /// Mark the engine plays
        #[arg(long)]
        mark: Mark,

        /// Print the search report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play itself from the empty board
    Selfplay {
        /// Pause before each engine move, in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },
}
