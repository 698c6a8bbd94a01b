//! Text rendering of the board and status lines.

use crate::session::{GameMode, GameSession};
use std::fmt::Write;
use tictactoe_core::{Board, Cell, Mark, Outcome, Position, SearchReport};

/// Formats the board as a numbered grid.
///
/// Empty cells show their 1-based number (what a human types), occupied
/// cells their mark. Cells in `highlight` are bracketed.
pub fn render_board(board: &Board, highlight: Option<[Position; 3]>) -> String {
    let mut result = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .filter_map(|col| Position::from_index(row * 3 + col))
            .map(|pos| {
                let symbol = match board.get(pos) {
                    Cell::Empty => (pos.to_index() + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                if highlight.is_some_and(|line| line.contains(&pos)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        result.push_str(&cells.join("|"));
        result.push('\n');
        if row < 2 {
            result.push_str("---+---+---\n");
        }
    }
    result
}

/// Line announcing whose turn it is.
pub fn turn_line(session: &GameSession) -> String {
    let mark = session.to_move();
    if session.mode() == GameMode::PlayerVsEngine && mark == session.human_mark() {
        format!("Your turn ({})", mark)
    } else {
        format!("Player {}'s turn", mark)
    }
}

/// Line announcing the result, or `None` while the game is on.
pub fn result_line(session: &GameSession) -> Option<String> {
    match session.status() {
        Outcome::Win(mark) if session.engine_mark() == Some(mark) => {
            Some("Engine wins!".to_string())
        }
        Outcome::Win(mark) => Some(format!("Player {} wins!", mark)),
        Outcome::Draw => Some("Stalemate!".to_string()),
        Outcome::Ongoing => None,
    }
}

/// Answer of the `best-move` command: 1-based cell, label and 0-based index.
pub fn best_move_line(report: &SearchReport, mark: Mark) -> String {
    match report.best {
        Some(position) => format!(
            "Best move for {}: {} ({}, index {})",
            mark,
            position.to_index() + 1,
            position,
            position.to_index()
        ),
        None => "No move: the board is full".to_string(),
    }
}

/// Full `analyze` listing: the board, every root move with its score,
/// the chosen move and the node count.
pub fn analysis(board: &Board, mark: Mark, report: &SearchReport) -> String {
    let mut text = render_board(board, None);
    // Writing to a String cannot fail.
    let _ = writeln!(text, "\n{} to move", mark);
    for scored in &report.moves {
        let _ = writeln!(
            text,
            "  {} {:<14} {:>4}",
            scored.position.to_index() + 1,
            scored.position.label(),
            scored.score
        );
    }
    let _ = match (report.best, report.score) {
        (Some(position), Some(score)) => writeln!(text, "Best: {} (score {})", position, score),
        _ => writeln!(text, "Best: none"),
    };
    let _ = writeln!(text, "Nodes searched: {}", report.nodes);
    text
}

/// The search report as pretty-printed JSON.
pub fn analysis_json(report: &SearchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
