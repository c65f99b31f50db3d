//! Board value type over two per-mark bitboards

use super::bitboard::Bitboard;
use super::{Mark, BOARD_SIZE, TOTAL_CELLS};

/// Game board: 9 cells in row-major order (0,1,2 = top row).
///
/// The board is a `Copy` value type. Mutation goes through
/// [`crate::rules::apply_move`], which returns a new board, so a board held
/// by one game state can never be aliased by another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Cells occupied by X
    x: Bitboard,
    /// Cells occupied by O
    o: Bitboard,
}

impl Board {
    /// Create an empty board
    pub const fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Get the mark at a cell, `None` if empty
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Mark> {
        if self.x.get(idx) {
            Some(Mark::X)
        } else if self.o.get(idx) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_free(&self, idx: usize) -> bool {
        self.get(idx).is_none()
    }

    /// Place a mark without an occupancy check.
    /// Use `rules::apply_move` for game moves.
    #[inline]
    pub(crate) fn place(&mut self, idx: usize, mark: Mark) {
        match mark {
            Mark::X => self.x.set(idx),
            Mark::O => self.o.set(idx),
        }
    }

    /// Bitboard of cells occupied by a mark
    #[inline]
    pub fn cells(&self, mark: Mark) -> Bitboard {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Number of cells occupied by a mark
    #[inline]
    pub fn count(&self, mark: Mark) -> u32 {
        self.cells(mark).count()
    }

    /// Bitboard of all occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        Bitboard::from_mask(self.x.mask() | self.o.mask())
    }

    /// Total marks on the board
    #[inline]
    pub fn mark_count(&self) -> u32 {
        self.occupied().count()
    }

    /// Check if no marks have been placed
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }
}

impl std::fmt::Display for Board {
    /// Render as three rows of `X`/`O`/`.`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match self.get(row * BOARD_SIZE + col) {
                    Some(mark) => write!(f, "{}", mark.symbol())?,
                    None => write!(f, ".")?,
                }
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
impl Board {
    /// Build a board from a 9-character string, e.g. `"XX..O...."`.
    /// `.` or `_` marks an empty cell. Panics on malformed input.
    pub(crate) fn parse(s: &str) -> Self {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(cells.len(), TOTAL_CELLS, "board string must have 9 cells");
        let mut board = Board::new();
        for (idx, c) in cells.into_iter().enumerate() {
            match c {
                'X' | 'x' => board.place(idx, Mark::X),
                'O' | 'o' => board.place(idx, Mark::O),
                '.' | '_' => {}
                other => panic!("bad cell char {:?}", other),
            }
        }
        board
    }
}
