//! The explicit game context shared by players, orchestrator and renderer.

use serde::{Deserialize, Serialize};
use tictactoe_core::{Board, Mark, Outcome, Position, evaluate, winning_line};
use tracing::{debug, info, instrument, warn};

/// Who sits at the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
pub enum GameMode {
    /// Two humans share the terminal.
    #[serde(rename = "pvp")]
    #[value(name = "pvp")]
    #[strum(to_string = "Player vs Player")]
    PlayerVsPlayer,
    /// A human plays the minimax engine.
    #[default]
    #[serde(rename = "pva")]
    #[value(name = "pva")]
    #[strum(to_string = "Player vs Engine")]
    PlayerVsEngine,
}

/// Error that can occur when applying a move to a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// One round of tic-tac-toe.
///
/// X always moves first. The session is the only owner of the authoritative
/// board; the engine only ever sees copies of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    to_move: Mark,
    mode: GameMode,
    human_mark: Mark,
    status: Outcome,
    history: Vec<Position>,
}

impl GameSession {
    /// Creates a new session. `human_mark` only matters against the engine.
    #[instrument]
    pub fn new(mode: GameMode, human_mark: Mark) -> Self {
        info!(%mode, ?human_mark, "Creating new game session");
        Self {
            board: Board::new(),
            to_move: Mark::X,
            mode,
            human_mark,
            status: Outcome::Ongoing,
            history: Vec::new(),
        }
    }

    /// Clears the board for a new round, keeping mode and marks.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting session");
        self.board = Board::new();
        self.to_move = Mark::X;
        self.status = Outcome::Ongoing;
        self.history.clear();
    }

    /// Places the current player's mark.
    ///
    /// The turn passes only while the game continues, so after a win
    /// `to_move()` still names the winner.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the round has ended and
    /// [`MoveError::SquareOccupied`] for a taken cell.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<Outcome, MoveError> {
        if self.status.is_terminal() {
            warn!("Move after game over");
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            warn!("Square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        self.board.set(position, self.to_move);
        self.history.push(position);
        self.status = evaluate(&self.board);

        if self.status.is_terminal() {
            info!(status = %self.status, moves = self.history.len(), "Game over");
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(self.status)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move (the winner, once the game is won).
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the human's mark in engine games.
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// Returns the engine's mark, if an engine is playing.
    pub fn engine_mark(&self) -> Option<Mark> {
        match self.mode {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsEngine => Some(self.human_mark.opponent()),
        }
    }

    /// Returns the game status.
    pub fn status(&self) -> Outcome {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the cells of the winning line, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(&self.board).map(|(_, line)| line)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default(), Mark::X)
    }
}
