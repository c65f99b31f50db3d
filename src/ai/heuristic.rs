//! Medium strategy: fixed-priority heuristic
//!
//! Priorities, first match wins:
//! 1. Take an immediate win
//! 2. Block the opponent's immediate win
//! 3. Center
//! 4. Random empty corner
//! 5. Lowest-index remaining empty cell
//!
//! The ordering has known tactical blind spots versus forks; that is the
//! intended behavior of this tier, not a bug. The corner/side asymmetry
//! (random corner, deterministic side) is intentional as well.

use rand::Rng;

use crate::board::{Board, Mark, CENTER, CORNERS};
use crate::rules::{apply_move, empty_cells, winner};

/// Pick a move by the fixed priority list, `None` on a full board
pub fn choose_move(board: &Board, ai: Mark) -> Option<usize> {
    choose_move_with(board, ai, &mut rand::rng())
}

/// Same as [`choose_move`] with a caller-supplied RNG (seedable in tests)
pub(crate) fn choose_move_with<R: Rng + ?Sized>(
    board: &Board,
    ai: Mark,
    rng: &mut R,
) -> Option<usize> {
    let opponent = ai.opponent();
    let empties = empty_cells(board);
    if empties.is_empty() {
        return None;
    }

    // 1. Take the win
    for &idx in &empties {
        if winner(&apply_move(board, idx, ai)) == Some(ai) {
            return Some(idx);
        }
    }

    // 2. Block the opponent's win
    for &idx in &empties {
        if winner(&apply_move(board, idx, opponent)) == Some(opponent) {
            return Some(idx);
        }
    }

    // 3. Center
    if board.is_free(CENTER) {
        return Some(CENTER);
    }

    // 4. Random empty corner
    let corners: Vec<usize> = CORNERS.into_iter().filter(|&idx| board.is_free(idx)).collect();
    if !corners.is_empty() {
        return Some(corners[rng.random_range(0..corners.len())]);
    }

    // 5. Lowest empty cell
    empties.first().copied()
}
