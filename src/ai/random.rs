//! Easy strategy: uniform-random choice among empty cells

use rand::Rng;

use crate::board::Board;
use crate::rules::empty_cells;

/// Pick a uniformly random empty cell, `None` on a full board
pub fn choose_move(board: &Board) -> Option<usize> {
    choose_move_with(board, &mut rand::rng())
}

/// Same as [`choose_move`] with a caller-supplied RNG (seedable in tests)
pub(crate) fn choose_move_with<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empties = empty_cells(board);
    if empties.is_empty() {
        return None;
    }
    Some(empties[rng.random_range(0..empties.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn only_returns_empty_cells() {
        let board = Board::parse("XO..X..O.");
        let empties = empty_cells(&board);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let idx = choose_move_with(&board, &mut rng).unwrap();
            assert!(empties.contains(&idx), "cell {} is not empty", idx);
        }
    }

    #[test]
    fn covers_every_empty_cell_eventually() {
        let board = Board::parse("XOX.O....");
        let empties = empty_cells(&board);
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(choose_move_with(&board, &mut rng).unwrap());
        }
        for idx in empties {
            assert!(seen.contains(&idx), "cell {} never chosen", idx);
        }
    }

    #[test]
    fn full_board_yields_none() {
        let board = Board::parse("XOXXOOOXX");
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose_move_with(&board, &mut rng), None);
    }

    #[test]
    fn single_empty_cell_is_forced() {
        let board = Board::parse("XOXXOOOX.");
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(choose_move_with(&board, &mut rng), Some(8));
    }
}
