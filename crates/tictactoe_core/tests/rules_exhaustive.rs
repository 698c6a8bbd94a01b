//! Checks the rule evaluator against every well-formed board.

use tictactoe_core::{Board, Cell, Mark, Outcome, Position, WIN_LINES, evaluate, winning_line};

/// Decodes `n` (base 3) into a board: 0 empty, 1 X, 2 O.
fn board_from_code(mut n: u32) -> Board {
    let mut cells = [Cell::Empty; 9];
    for cell in cells.iter_mut() {
        *cell = match n % 3 {
            0 => Cell::Empty,
            1 => Cell::Occupied(Mark::X),
            _ => Cell::Occupied(Mark::O),
        };
        n /= 3;
    }
    Board::from_cells(cells)
}

/// Lines rebuilt from row/column arithmetic rather than the table.
fn arithmetic_lines() -> Vec<[usize; 3]> {
    let mut lines = Vec::new();
    for r in 0..3 {
        lines.push([r * 3, r * 3 + 1, r * 3 + 2]);
    }
    for c in 0..3 {
        lines.push([c, c + 3, c + 6]);
    }
    lines.push([0, 4, 8]);
    lines.push([2, 4, 6]);
    lines
}

fn winners(board: &Board) -> Vec<Mark> {
    let cells = board.cells();
    let mut found = Vec::new();
    for [a, b, c] in arithmetic_lines() {
        if let Cell::Occupied(m) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
            && !found.contains(&m)
        {
            found.push(m);
        }
    }
    found
}

fn well_formed(board: &Board) -> bool {
    let x = board.count(Mark::X);
    let o = board.count(Mark::O);
    x == o || x == o + 1
}

#[test]
fn test_table_matches_arithmetic_lines() {
    let table: Vec<[usize; 3]> = WIN_LINES
        .iter()
        .map(|line| line.map(Position::to_index))
        .collect();
    assert_eq!(table, arithmetic_lines());
}

#[test]
fn test_evaluate_all_well_formed_boards() {
    let mut checked = 0;
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        if !well_formed(&board) {
            continue;
        }
        let found = winners(&board);
        if found.len() > 1 {
            // Both marks own a line; only table order can decide.
            continue;
        }

        let expected = match found.first() {
            Some(m) => Outcome::Win(*m),
            None if board.cells().iter().all(|c| *c != Cell::Empty) => Outcome::Draw,
            None => Outcome::Ongoing,
        };
        assert_eq!(evaluate(&board), expected, "board {}", board);
        checked += 1;
    }
    assert!(checked > 5000);
}

#[test]
fn test_each_single_line_win() {
    for line in WIN_LINES {
        for mark in [Mark::X, Mark::O] {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, mark);
            }
            assert_eq!(evaluate(&board), Outcome::Win(mark));
            assert_eq!(winning_line(&board), Some((mark, line)));
        }
    }
}

#[test]
fn test_canonical_draw() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Draw);
    assert_eq!(winning_line(&board), None);
}
