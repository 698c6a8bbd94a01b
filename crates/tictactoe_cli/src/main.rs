//! Tictactoe - unified CLI
//!
//! Play in the terminal, or query the engine directly.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use std::time::Duration;
use tictactoe_cli::{
    EnginePlayer, GameConfig, GameMode, GameSession, HumanPlayer, Orchestrator, Player, analysis,
    analysis_json, best_move_line, shared_input,
};
use tictactoe_core::{Board, Mark, Outcome, analyze};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            human_mark,
            delay_ms,
            config,
        } => run_play(&config, mode, human_mark, delay_ms).await,
        Command::BestMove { board, mark } => run_best_move(board, mark),
        Command::Analyze { board, mark, json } => run_analyze(board, mark, json),
        Command::Selfplay { delay_ms } => run_selfplay(delay_ms).await,
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(
    config_path: &Path,
    mode: Option<GameMode>,
    human_mark: Option<Mark>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)
        .context("Failed to load game configuration")?
        .with_overrides(mode, human_mark, delay_ms);
    info!(?config, "Starting game");

    let input = shared_input(tokio::io::BufReader::new(tokio::io::stdin()));
    let human = |name: String| -> Box<dyn Player> {
        Box::new(HumanPlayer::new(name, input.clone(), std::io::stdout()))
    };

    let (player_x, player_o) = match config.mode() {
        GameMode::PlayerVsPlayer => (human("Player X".into()), human("Player O".into())),
        GameMode::PlayerVsEngine => {
            let engine: Box<dyn Player> =
                Box::new(EnginePlayer::new(config.engine_name(), config.engine_delay()));
            let person = human(config.human_name().clone());
            match config.human_mark() {
                Mark::X => (person, engine),
                Mark::O => (engine, person),
            }
        }
    };

    let session = GameSession::new(*config.mode(), *config.human_mark());
    println!("{}. Type a cell number (1-9) or 'q' to quit.", config.mode());
    let mut orchestrator = Orchestrator::new(session, player_x, player_o, std::io::stdout());
    let outcomes = orchestrator.run_rounds(&input).await?;
    info!(rounds = outcomes.len(), "Game over");
    Ok(())
}

/// Print the engine's chosen move
#[instrument]
fn run_best_move(mut board: Board, mark: Mark) -> Result<()> {
    let report = analyze(&mut board, mark, mark.opponent())?;
    println!("{}", best_move_line(&report, mark));
    Ok(())
}

/// Print every root move with its score
#[instrument]
fn run_analyze(mut board: Board, mark: Mark, json: bool) -> Result<()> {
    let report = analyze(&mut board, mark, mark.opponent())?;
    if json {
        println!(
            "{}",
            analysis_json(&report).context("Failed to serialize analysis")?
        );
    } else {
        print!("{}", analysis(&board, mark, &report));
    }
    Ok(())
}

/// Engine against engine from the empty board
#[instrument]
async fn run_selfplay(delay_ms: u64) -> Result<()> {
    let delay = Duration::from_millis(delay_ms);
    let session = GameSession::new(GameMode::PlayerVsPlayer, Mark::X);
    let mut orchestrator = Orchestrator::new(
        session,
        Box::new(EnginePlayer::new("Engine X", delay)),
        Box::new(EnginePlayer::new("Engine O", delay)),
        std::io::stdout(),
    );
    let outcome = orchestrator.run().await?;
    if outcome != Outcome::Draw {
        anyhow::bail!("Self-play ended in {}, expected a draw", outcome);
    }
    Ok(())
}
