//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::{HumanPlayer, SharedInput, shared_input};

use crate::session::GameSession;
use anyhow::Result;
use tictactoe_core::Position;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Chooses the next move for the mark the session says is to move.
    ///
    /// The returned position must be empty on the session board.
    async fn choose_move(&mut self, session: &GameSession) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
