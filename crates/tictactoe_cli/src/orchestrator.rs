//! Game orchestration between players.

use crate::players::{Player, SharedInput};
use crate::render::{render_board, result_line, turn_line};
use crate::session::GameSession;
use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_core::{Mark, Outcome};
use tokio::io::AsyncBufRead;
use tracing::{debug, info, instrument};

/// Runs one round between two players, rendering as it goes.
pub struct Orchestrator<W> {
    session: GameSession,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator over a fresh or in-progress session.
    pub fn new(
        session: GameSession,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        out: W,
    ) -> Self {
        Self {
            session,
            player_x,
            player_o,
            out,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays until the game is won or drawn.
    #[instrument(skip(self), fields(mode = %self.session.mode()))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!(
            x = %self.player_x.name(),
            o = %self.player_o.name(),
            "Starting game orchestration"
        );

        loop {
            if self.session.is_over() {
                let board = render_board(self.session.board(), self.session.winning_line());
                write!(self.out, "\n{}", board)?;
                if let Some(line) = result_line(&self.session) {
                    writeln!(self.out, "{}", line)?;
                }
                info!(status = %self.session.status(), "Game finished");
                return Ok(self.session.status());
            }

            write!(self.out, "\n{}", render_board(self.session.board(), None))?;
            writeln!(self.out, "{}", turn_line(&self.session))?;
            self.out.flush()?;

            let mark = self.session.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), "Waiting for move");
            let position = player.choose_move(&self.session).await?;
            let name = player.name().to_string();

            self.session
                .play(position)
                .with_context(|| format!("{} chose an illegal move", name))?;
            writeln!(self.out, "{} plays {} ({})", name, position.to_index() + 1, position)?;
        }
    }

    /// Clears the board for another round with the same players.
    pub fn restart(&mut self) {
        self.session.reset();
    }

    /// Plays rounds until the answer to "Play again?" is not yes.
    ///
    /// The answer is read from `input`, the same reader the humans type
    /// moves on. End of input counts as no.
    #[instrument(skip_all, fields(mode = %self.session.mode()))]
    pub async fn run_rounds<R>(&mut self, input: &SharedInput<R>) -> Result<Vec<Outcome>>
    where
        R: AsyncBufRead + Unpin + Send,
    {
        let mut outcomes = Vec::new();
        loop {
            outcomes.push(self.run().await?);

            write!(self.out, "Play again? [y/N] ")?;
            self.out.flush()?;
            let answer = input.lock().await.next_line().await?;
            if !answer.as_deref().is_some_and(is_yes) {
                writeln!(self.out)?;
                info!(rounds = outcomes.len(), "Leaving the table");
                return Ok(outcomes);
            }

            debug!(round = outcomes.len() + 1, "Starting another round");
            self.restart();
        }
    }
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
