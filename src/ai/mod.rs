//! Move selection for the computer opponent
//!
//! The selector is a pure dispatch over the difficulty level:
//! - [`random`]: uniform-random choice among empty cells
//! - [`heuristic`]: fixed-priority rules (win, block, center, corner, side)
//! - [`minimax`]: exhaustive game-tree search with alpha-beta pruning
//!
//! All three return `None` only on a board with no empty cells. Callers are
//! not supposed to ask for a move on a terminal board, but the strategies
//! defend against it anyway.

pub mod heuristic;
pub mod minimax;
pub mod random;

use crate::board::{Board, Mark};

/// Difficulty of the computer opponent. Pure configuration, no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    /// Random moves
    Easy,
    /// Fixed-priority heuristic with known blind spots versus forks
    #[default]
    Medium,
    /// Full minimax search, never loses
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    /// Parse a level name. Unrecognized names fall back to `Medium`.
    pub fn from_name(name: &str) -> Level {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Level::Easy,
            "hard" => Level::Hard,
            _ => Level::Medium,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Select the cell the computer should occupy.
///
/// Returns `None` only when the board has no empty cells.
pub fn select_move(board: &Board, ai: Mark, level: Level) -> Option<usize> {
    match level {
        Level::Easy => random::choose_move(board),
        Level::Medium => heuristic::choose_move(board, ai),
        Level::Hard => minimax::choose_move(board, ai),
    }
}
