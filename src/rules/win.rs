//! Win detection over the 8 fixed lines
//!
//! A line is won when all three of its cells hold the same mark. Lines are
//! scanned in a fixed order (rows, columns, diagonals); the first complete
//! line decides the result. Legal play can never produce two complete lines
//! of different marks, so the scan order is not defended further.

use crate::board::{Board, Mark};

/// The 8 winning index triples: 3 rows, 3 columns, 2 diagonals
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Bit mask for one line
const fn line_mask(line: [usize; 3]) -> u16 {
    (1u16 << line[0]) | (1u16 << line[1]) | (1u16 << line[2])
}

/// Precomputed cell masks for `WIN_LINES`, same order
const LINE_MASKS: [u16; 8] = [
    line_mask(WIN_LINES[0]),
    line_mask(WIN_LINES[1]),
    line_mask(WIN_LINES[2]),
    line_mask(WIN_LINES[3]),
    line_mask(WIN_LINES[4]),
    line_mask(WIN_LINES[5]),
    line_mask(WIN_LINES[6]),
    line_mask(WIN_LINES[7]),
];

/// Find the first complete line and return its index triple.
///
/// Used by the presentation layer to highlight the winning cells.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let x = board.cells(Mark::X);
    let o = board.cells(Mark::O);
    for (i, &mask) in LINE_MASKS.iter().enumerate() {
        if x.covers(mask) || o.covers(mask) {
            return Some(WIN_LINES[i]);
        }
    }
    None
}

/// Return the mark occupying a complete line, `None` if no line is complete
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|line| board.get(line[0]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn top_row_wins() {
        let board = Board::parse("XXXOO....");
        assert_eq!(winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn every_row_and_column_detected() {
        for line in WIN_LINES {
            let mut cells = ['.'; 9];
            for idx in line {
                cells[idx] = 'O';
            }
            let board = Board::parse(&cells.iter().collect::<String>());
            assert_eq!(winner(&board), Some(Mark::O), "line {:?}", line);
            assert_eq!(winning_line(&board), Some(line));
        }
    }

    #[test]
    fn diagonal_wins() {
        let board = Board::parse("O.X.O.X.O");
        assert_eq!(winner(&board), Some(Mark::O));
        assert_eq!(winning_line(&board), Some([0, 4, 8]));
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = Board::parse("XOX......");
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn full_draw_board_has_no_winner() {
        // X O X / X O O / O X X
        let board = Board::parse("XOXXOOOXX");
        assert_eq!(winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn winner_matches_line_occupancy() {
        // winner returns a mark iff some line's three cells are equal and
        // non-empty
        let boards = [
            ("X.X.X.X.X", Some(Mark::X)), // diagonal [0,4,8] among others
            ("OOO......", Some(Mark::O)),
            ("XO.OX.O.X", Some(Mark::X)),
            ("XXOOOXXO.", None),
        ];
        for (s, expected) in boards {
            let board = Board::parse(s);
            assert_eq!(winner(&board), expected, "board {:?}", s);
        }
    }
}
