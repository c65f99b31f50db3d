//! Board representation for tic-tac-toe

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board side length (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Index of the center cell
pub const CENTER: usize = 4;

/// Indices of the four corner cells
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark. Total over both variants.
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol for display
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Convert a (row, col) pair to a cell index (row-major, 0-8)
#[inline]
pub fn cell_index(row: usize, col: usize) -> usize {
    debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
    row * BOARD_SIZE + col
}
