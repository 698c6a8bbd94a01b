//! Human player that reads moves from a line-oriented input.

use super::Player;
use crate::session::GameSession;
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tictactoe_core::Position;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Line source shared by every human at the same terminal.
///
/// Two humans reading through separate buffers would steal each other's
/// lines, so both hold a handle to one reader.
pub type SharedInput<R> = Arc<Mutex<Lines<R>>>;

/// Wraps a reader for sharing between human players.
pub fn shared_input<R: AsyncBufRead + Unpin>(reader: R) -> SharedInput<R> {
    Arc::new(Mutex::new(reader.lines()))
}

/// Human player typing cell numbers (1-9) or cell names.
pub struct HumanPlayer<R, W> {
    name: String,
    input: SharedInput<R>,
    out: W,
}

impl<R, W> HumanPlayer<R, W> {
    /// Creates a new human player. Prompts and complaints go to `out`.
    pub fn new(name: impl Into<String>, input: SharedInput<R>, out: W) -> Self {
        Self {
            name: name.into(),
            input,
            out,
        }
    }
}

#[async_trait::async_trait]
impl<R, W> Player for HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn choose_move(&mut self, session: &GameSession) -> Result<Position> {
        loop {
            write!(self.out, "{} > ", self.name)?;
            self.out.flush()?;

            let line = self.input.lock().await.next_line().await?;
            let Some(line) = line else {
                anyhow::bail!("Input closed before {} moved", self.name);
            };
            let trimmed = line.trim();
            if matches!(trimmed, "q" | "quit") {
                anyhow::bail!("{} quit the game", self.name);
            }

            let Some(position) = Position::from_label_or_number(trimmed) else {
                warn!(player = %self.name, input = %trimmed, "Unrecognized move");
                writeln!(self.out, "Enter a cell number 1-9 or a name like 'center'")?;
                continue;
            };
            if !session.board().is_empty(position) {
                warn!(player = %self.name, %position, "Square occupied");
                writeln!(self.out, "{} is already taken", position)?;
                continue;
            }

            debug!(player = %self.name, %position, "Human chose position");
            return Ok(position);
        }
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
    async fn test_skips_bad_and_taken_cells() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer, Mark::X);
        session.play(Position::Center).unwrap();

        let input = shared_input(b"banana\n5\n\n9\n".as_slice());
        let mut player = HumanPlayer::new("Player O", input, Vec::new());
        let choice = player.choose_move(&session).await.unwrap();
        assert_eq!(choice, Position::BottomRight);

        let transcript = String::from_utf8(player.out.clone()).unwrap();
        assert!(transcript.contains("Center is already taken"));
    }

    #[tokio::test]
    async fn test_closed_input_is_error() {
        let session = GameSession::default();
        let input = shared_input(b"".as_slice());
        let mut player = HumanPlayer::new("Player X", input, std::io::sink());
        assert!(player.choose_move(&session).await.is_err());
    }

    #[tokio::test]
    async fn test_players_share_one_reader() {
        let session = GameSession::default();
        let input = shared_input(b"1\n2\n".as_slice());
        let mut x = HumanPlayer::new("Player X", input.clone(), std::io::sink());
        let mut o = HumanPlayer::new("Player O", input, std::io::sink());
        assert_eq!(x.choose_move(&session).await.unwrap(), Position::TopLeft);
        assert_eq!(o.choose_move(&session).await.unwrap(), Position::TopCenter);
    }
}
