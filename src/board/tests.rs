//! Tests for the board module

use super::*;

#[test]
fn bitboard_set_get_clear() {
    let mut bb = Bitboard::new();
    assert!(bb.is_empty());

    bb.set(0);
    bb.set(4);
    bb.set(8);
    assert!(bb.get(0));
    assert!(bb.get(4));
    assert!(bb.get(8));
    assert!(!bb.get(1));
    assert_eq!(bb.count(), 3);

    bb.clear(4);
    assert!(!bb.get(4));
    assert_eq!(bb.count(), 2);
}

#[test]
fn bitboard_iter_ascending() {
    let mut bb = Bitboard::new();
    for idx in [7, 2, 5, 0] {
        bb.set(idx);
    }
    let ones: Vec<usize> = bb.iter_ones().collect();
    assert_eq!(ones, vec![0, 2, 5, 7]);
}

#[test]
fn bitboard_covers_mask() {
    let mut bb = Bitboard::new();
    bb.set(0);
    bb.set(1);
    bb.set(2);
    assert!(bb.covers(0b111));
    assert!(!bb.covers(0b1011));
}

#[test]
fn mark_opponent_is_involution() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::X.opponent().opponent(), Mark::X);
}

#[test]
fn empty_board_has_no_marks() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert_eq!(board.mark_count(), 0);
    for idx in 0..TOTAL_CELLS {
        assert_eq!(board.get(idx), None);
        assert!(board.is_free(idx));
    }
}

#[test]
fn place_and_get() {
    let mut board = Board::new();
    board.place(4, Mark::X);
    board.place(0, Mark::O);

    assert_eq!(board.get(4), Some(Mark::X));
    assert_eq!(board.get(0), Some(Mark::O));
    assert_eq!(board.get(8), None);
    assert_eq!(board.count(Mark::X), 1);
    assert_eq!(board.count(Mark::O), 1);
    assert_eq!(board.mark_count(), 2);
}

#[test]
fn board_is_a_value_type() {
    let mut a = Board::new();
    let b = a;
    a.place(0, Mark::X);

    // Copies do not alias
    assert_eq!(a.get(0), Some(Mark::X));
    assert_eq!(b.get(0), None);
}

#[test]
fn parse_round_trips_display() {
    let board = Board::parse("XX..O...O");
    assert_eq!(board.get(0), Some(Mark::X));
    assert_eq!(board.get(1), Some(Mark::X));
    assert_eq!(board.get(4), Some(Mark::O));
    assert_eq!(board.get(8), Some(Mark::O));
    assert_eq!(board.to_string(), "XX.\n.O.\n..O");
}

#[test]
fn cell_index_row_major() {
    assert_eq!(cell_index(0, 0), 0);
    assert_eq!(cell_index(0, 2), 2);
    assert_eq!(cell_index(1, 1), CENTER);
    assert_eq!(cell_index(2, 2), 8);
}
