//! Tic-tac-toe engine with a three-tier computer opponent
//!
//! A single-player 3x3 tic-tac-toe game against a computer opponent with
//! three difficulty tiers and a session score. The engine itself is a small
//! pure core; the GUI calls into it through a narrow interface.
//!
//! # Architecture
//!
//! - [`board`]: bitboard-backed board value type
//! - [`rules`]: pure rules engine (win detection, turn derivation, move
//!   application)
//! - [`ai`]: move selection (random / heuristic / minimax with alpha-beta)
//! - [`ui`]: egui presentation layer (board view, session score, settings)
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{ai, rules, Board, Level, Mark};
//!
//! let mut board = Board::new();
//!
//! // Human X opens in the center
//! board = rules::apply_move(&board, 4, Mark::X);
//!
//! // Computer O answers at the hardest level
//! if let Some(idx) = ai::select_move(&board, Mark::O, Level::Hard) {
//!     board = rules::apply_move(&board, idx, Mark::O);
//! }
//!
//! assert_eq!(board.mark_count(), 2);
//! assert!(rules::winner(&board).is_none());
//! ```
//!
//! # Difficulty tiers
//!
//! - **Easy**: uniform-random choice among empty cells
//! - **Medium**: win, block, center, random corner, lowest side — in that
//!   order, with known blind spots versus forks
//! - **Hard**: exhaustive minimax with alpha-beta pruning and depth-adjusted
//!   scoring; wins or draws from every position

pub mod ai;
pub mod board;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use ai::{select_move, Level};
pub use board::{Board, Mark, BOARD_SIZE, CENTER, CORNERS, TOTAL_CELLS};
