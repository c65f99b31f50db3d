//! Hard strategy: exhaustive minimax with alpha-beta pruning
//!
//! Terminal boards score `+10` for an AI win, `-10` for an opponent win and
//! `0` for a draw, adjusted by search depth (`10 - depth` / `-10 + depth`,
//! depth in plies from the root) so the search prefers the fastest win and
//! the slowest loss. Alpha-beta cutoffs never change the chosen move or
//! score; the 9-cell tree is small enough that the search always completes
//! without deepening or time limits.

use crate::board::{Board, Mark};
use crate::rules::{apply_move, empty_cells, turn_to_move, winner};

/// Score of a win found at the root
const WIN_SCORE: i32 = 10;

/// Bound strictly outside the reachable score range
const INF: i32 = WIN_SCORE + 1;

/// Pick the minimax-optimal move, `None` on a full board
pub fn choose_move(board: &Board, ai: Mark) -> Option<usize> {
    let (_, best_move) = search(board, ai, turn_to_move(board), 0, -INF, INF);
    best_move
}

/// Recursive alpha-beta search.
///
/// Maximizes when `to_move == ai`, minimizes otherwise. Ties go to the move
/// enumerated first (ascending empty-cell order): later equal scores never
/// overwrite the best move.
fn search(
    board: &Board,
    ai: Mark,
    to_move: Mark,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<usize>) {
    if let Some(mark) = winner(board) {
        let score = if mark == ai {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
        return (score, None);
    }

    let empties = empty_cells(board);
    if empties.is_empty() {
        return (0, None);
    }

    let maximizing = to_move == ai;
    let mut best_score = if maximizing { -INF } else { INF };
    let mut best_move = None;

    for &idx in &empties {
        let next = apply_move(board, idx, to_move);
        let (score, _) = search(&next, ai, to_move.opponent(), depth + 1, alpha, beta);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(idx);
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(idx);
            }
            beta = beta.min(best_score);
        }

        // Remaining siblings cannot change the parent's choice
        if beta <= alpha {
            break;
        }
    }

    (best_score, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_full;

    #[test]
    fn takes_the_immediate_win() {
        // X at 0,1 wins at 2
        let board = Board::parse("XX..O....");
        assert_eq!(choose_move(&board, Mark::X), Some(2));
    }

    #[test]
    fn blocks_the_immediate_loss() {
        // X at 0,1 threatens the top row; O must block at 2
        let board = Board::parse("XX..O....");
        assert_eq!(choose_move(&board, Mark::O), Some(2));
    }

    #[test]
    fn replies_to_center_opening_with_a_corner() {
        // Opponent X took the center; the optimal replies are the corners
        let board = Board::parse("....X....");
        let idx = choose_move(&board, Mark::O).unwrap();
        assert!(
            crate::board::CORNERS.contains(&idx),
            "expected a corner reply, got {}",
            idx
        );
    }

    #[test]
    fn prefers_the_fastest_win() {
        // X O O / . X . / . . . — X wins immediately at 8, and can also
        // force a slower win through 6 (double threat). Depth-adjusted
        // scoring must pick the immediate one even though cell 6 is
        // enumerated first.
        let board = Board::parse("XOO.X....");
        assert_eq!(choose_move(&board, Mark::X), Some(8));
    }

    #[test]
    fn tie_break_is_first_empty_cell() {
        // Every opening move on an empty board is worth a draw under
        // perfect play, so the first enumerated cell wins the tie
        let board = Board::new();
        assert_eq!(choose_move(&board, Mark::X), Some(0));
    }

    #[test]
    fn full_board_yields_none() {
        let board = Board::parse("XOXXOOOXX");
        assert_eq!(choose_move(&board, Mark::X), None);
    }

    /// Play the hard AI against every possible opponent move sequence and
    /// fail if any line ends in an AI loss.
    fn assert_never_loses_from(board: Board, ai: Mark) {
        if let Some(mark) = winner(&board) {
            assert_ne!(mark, ai.opponent(), "AI lost:\n{}", board);
            return;
        }
        if is_full(&board) {
            return;
        }

        if turn_to_move(&board) == ai {
            let idx = choose_move(&board, ai).unwrap();
            assert!(board.is_free(idx));
            assert_never_loses_from(apply_move(&board, idx, ai), ai);
        } else {
            let opponent = ai.opponent();
            for idx in empty_cells(&board) {
                assert_never_loses_from(apply_move(&board, idx, opponent), ai);
            }
        }
    }

    #[test]
    fn never_loses_moving_first() {
        assert_never_loses_from(Board::new(), Mark::X);
    }

    #[test]
    fn never_loses_moving_second() {
        assert_never_loses_from(Board::new(), Mark::O);
    }
}
