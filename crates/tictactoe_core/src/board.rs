//! The nine-cell board and pure queries over it.

use crate::position::Position;
use crate::types::{Cell, Mark};
use std::str::FromStr;
use tracing::instrument;

/// Error raised by board queries and parsing.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A raw index outside 0..9 was used.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(#[error(not(source))] usize),

    /// Board notation could not be parsed.
    #[display("Invalid board notation: {}", _0)]
    Parse(#[error(not(source))] String),
}

/// 3x3 tic-tac-toe board.
///
/// A plain value type: copying it is a 9-byte copy. The search engine
/// borrows it mutably for the duration of a call and restores every cell
/// it touches before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from nine cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at a raw index is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] if `index >= 9`.
    pub fn is_empty_at(&self, index: usize) -> Result<bool, BoardError> {
        let pos = Position::try_from(index)?;
        Ok(self.is_empty(pos))
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Places a mark.
    ///
    /// The previous contents are overwritten without checking; callers only
    /// write to cells they know are empty.
    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = Cell::Occupied(mark);
    }

    /// Clears a cell back to empty.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// Iterates empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(move |pos| self.is_empty(*pos))
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses compact notation such as `"XO./.X./..O"`.
    ///
    /// `X`/`O` (any case) are marks; `.`, `-`, `_` and spaces are empty.
    /// `/`, `|` and line breaks separate rows and are ignored.
    #[instrument(level = "debug", err(level = "debug"))]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0usize;

        for ch in s.chars().filter(|c| !matches!(c, '/' | '|' | '\n' | '\r')) {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                other => {
                    return Err(BoardError::Parse(format!(
                        "unexpected symbol '{}' in {:?}",
                        other, s
                    )));
                }
            };
            if count == 9 {
                return Err(BoardError::Parse(format!("more than 9 cells in {:?}", s)));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != 9 {
            return Err(BoardError::Parse(format!(
                "expected 9 cells, found {} in {:?}",
                count, s
            )));
        }

        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
