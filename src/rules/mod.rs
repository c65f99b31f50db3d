//! Game rules for tic-tac-toe
//!
//! The rules engine is a set of pure functions over an immutable
//! [`Board`](crate::board::Board) value:
//! - Win detection over the 8 fixed lines ([`win`])
//! - Fullness, turn derivation and move application ([`moves`])
//!
//! No function here keeps state of its own; every operation takes a board
//! value and returns a new value or a derived fact.

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{apply_move, empty_cells, is_full, turn_to_move};
pub use win::{winner, winning_line, WIN_LINES};
