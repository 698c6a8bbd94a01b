//! Exhaustive minimax move selection.
//!
//! Every call walks the whole remaining game tree on the caller's board,
//! placing and removing marks in place. Nothing survives between calls.

use crate::rules::{Outcome, evaluate};
use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a win found at the root of the search tree.
///
/// A win `d` plies below the root scores `WIN_SCORE - d`, a loss
/// `-WIN_SCORE + d`, a draw `0`.
pub const WIN_SCORE: i32 = 10;

/// Invalid arguments to the search engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// Engine and opponent were given the same mark.
    #[display("Engine and opponent cannot both play {}", _0)]
    SameMark(#[error(not(source))] Mark),
}

/// A root move and its minimax value for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell the engine would take.
    pub position: Position,
    /// Minimax value of taking it.
    pub score: i32,
}

/// Everything one search call found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move; `None` when the board has no empty cell.
    pub best: Option<Position>,
    /// Value of the chosen move.
    pub score: Option<i32>,
    /// Every root move in ascending index order.
    pub moves: Vec<ScoredMove>,
    /// Positions evaluated below the root.
    pub nodes: u64,
}

/// Picks the optimal move for `engine` on `board`.
///
/// Returns `Ok(None)` when no cell is empty. The board is borrowed
/// exclusively for the call and is identical on return.
///
/// # Errors
///
/// Returns [`SearchError::SameMark`] if `engine == opponent`.
pub fn best_move(
    board: &mut Board,
    engine: Mark,
    opponent: Mark,
) -> Result<Option<Position>, SearchError> {
    analyze(board, engine, opponent).map(|report| report.best)
}

/// Scores every legal move for `engine` and picks the best one.
///
/// Moves are tried in ascending index order and only a strictly greater
/// score replaces the current best, so ties go to the lowest index.
///
/// # Errors
///
/// Returns [`SearchError::SameMark`] if `engine == opponent`.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(
    board: &mut Board,
    engine: Mark,
    opponent: Mark,
) -> Result<SearchReport, SearchError> {
    if engine == opponent {
        return Err(SearchError::SameMark(engine));
    }

    let mut search = Minimax {
        board,
        engine,
        opponent,
        nodes: 0,
    };

    let mut best: Option<ScoredMove> = None;
    let mut moves = Vec::with_capacity(9);
    for position in Position::ALL {
        if !search.board.is_empty(position) {
            continue;
        }
        search.board.set(position, engine);
        let score = search.minimax(0, false);
        search.board.clear(position);

        let scored = ScoredMove { position, score };
        moves.push(scored);
        if best.is_none_or(|b| score > b.score) {
            best = Some(scored);
        }
    }

    let report = SearchReport {
        best: best.map(|m| m.position),
        score: best.map(|m| m.score),
        moves,
        nodes: search.nodes,
    };
    debug!(
        best = ?report.best,
        score = ?report.score,
        nodes = report.nodes,
        "Search complete"
    );
    Ok(report)
}

/// Per-call search context over the caller's board.
struct Minimax<'a> {
    board: &'a mut Board,
    engine: Mark,
    opponent: Mark,
    nodes: u64,
}

impl Minimax<'_> {
    /// Value of the current board for the engine, `depth` plies below the root move.
    fn minimax(&mut self, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        match evaluate(self.board) {
            Outcome::Win(mark) if mark == self.engine => return WIN_SCORE - depth,
            Outcome::Win(_) => return -WIN_SCORE + depth,
            Outcome::Draw => return 0,
            Outcome::Ongoing => {}
        }
        // Unreachable while evaluate() reports full boards as drawn.
        if self.board.is_full() {
            return 0;
        }

        let mover = if maximizing { self.engine } else { self.opponent };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for position in Position::ALL {
            if !self.board.is_empty(position) {
                continue;
            }
            self.board.set(position, mover);
            let value = self.minimax(depth + 1, !maximizing);
            self.board.clear(position);

            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_opens_top_left() {
        let mut b = Board::new();
        let report = analyze(&mut b, Mark::X, Mark::O).unwrap();
        assert_eq!(report.best, Some(Position::TopLeft));
        assert_eq!(report.score, Some(0));
        assert_eq!(report.moves.len(), 9);
        assert!(report.moves.iter().all(|m| m.score == 0));
        // Every node of the full game tree except the empty root.
        assert_eq!(report.nodes, 549_945);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut b = board("XOX/XOO/OXX");
        assert_eq!(best_move(&mut b, Mark::O, Mark::X), Ok(None));
        let report = analyze(&mut b, Mark::O, Mark::X).unwrap();
        assert_eq!(report.score, None);
        assert!(report.moves.is_empty());
        assert_eq!(report.nodes, 0);
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        let mut b = board("XOX/XOO/OX.");
        assert_eq!(
            best_move(&mut b, Mark::X, Mark::O),
            Ok(Some(Position::BottomRight))
        );
    }

    #[test]
    fn test_immediate_win_beats_delayed_win() {
        // X wins now at 8; X at 3 also forces a win, one move later.
        let mut b = board("XOO/.X./...");
        let report = analyze(&mut b, Mark::X, Mark::O).unwrap();
        assert_eq!(report.best, Some(Position::BottomRight));
        assert_eq!(report.score, Some(WIN_SCORE));

        let delayed = report
            .moves
            .iter()
            .find(|m| m.position == Position::MiddleLeft)
            .unwrap();
        assert_eq!(delayed.score, WIN_SCORE - 2);
    }

    #[test]
    fn test_blocks_open_row() {
        let mut b = board("XX./.O./...");
        assert_eq!(
            best_move(&mut b, Mark::O, Mark::X),
            Ok(Some(Position::TopRight))
        );
    }

    #[test]
    fn test_board_restored() {
        let original = board("X../.O./..X");
        let mut b = original;
        analyze(&mut b, Mark::O, Mark::X).unwrap();
        assert_eq!(b, original);
    }

    #[test]
    fn test_same_mark_rejected() {
        let mut b = Board::new();
        assert_eq!(
            best_move(&mut b, Mark::O, Mark::O),
            Err(SearchError::SameMark(Mark::O))
        );
    }

    #[test]
    fn test_deterministic() {
        let mut b = board("X../.../...");
        let first = analyze(&mut b, Mark::O, Mark::X).unwrap();
        let second = analyze(&mut b, Mark::O, Mark::X).unwrap();
        assert_eq!(first, second);
        // Only the center holds the draw against a corner opening.
        assert_eq!(first.best, Some(Position::Center));
    }
}
