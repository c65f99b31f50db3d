//! Move application and derived board facts

use crate::board::bitboard::FULL_MASK;
use crate::board::{Board, Mark, TOTAL_CELLS};

/// Check if every cell is occupied
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.occupied().covers(FULL_MASK)
}

/// Indices of empty cells, in ascending order.
///
/// The ordering is load-bearing: move selection breaks ties by whichever
/// empty cell is enumerated first.
pub fn empty_cells(board: &Board) -> Vec<usize> {
    (0..TOTAL_CELLS).filter(|&idx| board.is_free(idx)).collect()
}

/// Derive whose turn it is from the mark counts.
///
/// X always moves first, so it is X's turn exactly when both counts are
/// equal. Holds as long as marks are only placed through [`apply_move`].
#[inline]
pub fn turn_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) == board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Return a new board with `mark` placed at `idx`.
///
/// Precondition: the cell is empty. A call on an occupied cell is a silent
/// identity operation, not an error; callers are expected to reject such
/// moves before they reach the rules engine.
pub fn apply_move(board: &Board, idx: usize, mark: Mark) -> Board {
    if !board.is_free(idx) {
        return *board;
    }
    let mut next = *board;
    next.place(idx, mark);
    next
}
