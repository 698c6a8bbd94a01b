//! Player backed by the minimax engine.

use super::Player;
use crate::session::GameSession;
use anyhow::{Context, Result};
use std::time::Duration;
use tictactoe_core::{Position, best_move};
use tracing::{debug, instrument};

/// Engine player. Always plays optimally.
pub struct EnginePlayer {
    name: String,
    delay: Duration,
}

impl EnginePlayer {
    /// Creates an engine that answers after `delay`.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for EnginePlayer {
    #[instrument(skip(self, session), fields(engine = %self.name, mark = ?session.to_move()))]
    async fn choose_move(&mut self, session: &GameSession) -> Result<Position> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mark = session.to_move();
        let mut scratch = *session.board();
        let position = best_move(&mut scratch, mark, mark.opponent())?
            .with_context(|| format!("{} found no empty cell on {}", self.name, scratch))?;

        debug!(%position, "Engine chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GameMode;
    use tictactoe_core::Mark;

    #[tokio::test]
    async fn test_engine_blocks() {
        let mut session = GameSession::new(GameMode::PlayerVsEngine, Mark::X);
        for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
            session.play(pos).unwrap();
        }
        let mut engine = EnginePlayer::new("Engine", Duration::ZERO);
        let choice = engine.choose_move(&session).await.unwrap();
        assert_eq!(choice, Position::TopRight);
    }

    #[tokio::test]
    async fn test_engine_errors_on_full_board() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer, Mark::X);
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.play(Position::from_index(pos).unwrap()).unwrap();
        }
        assert!(session.is_over());
        let mut engine = EnginePlayer::new("Engine", Duration::ZERO);
        assert!(engine.choose_move(&session).await.is_err());
    }
}
