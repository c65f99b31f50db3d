//! Game state management for the tic-tac-toe GUI
//!
//! The state owns the authoritative board value and every caller-side
//! concern the engine leaves out: session score, difficulty selection,
//! starter alternation and the pending-computer-move lifecycle.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::ai::{self, Level};
use crate::board::{Board, Mark};
use crate::rules;

/// Artificial delay before the computer moves, so it reads as "thinking"
const THINK_DELAY: Duration = Duration::from_millis(300);

/// Session score. In-memory only; reset on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    pub player: u32,
    pub computer: u32,
    pub draws: u32,
}

/// Computer move computation state
pub enum AiState {
    Idle,
    /// A worker thread is computing the computer's move behind the thinking
    /// delay. Replacing this state drops the receiver, so a stale move can
    /// never be applied to a board reset underneath it.
    Thinking {
        receiver: Receiver<Option<usize>>,
        started: Instant,
    },
}

/// Outcome of a finished game, from the player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    PlayerWin,
    ComputerWin,
    Draw,
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub level: Level,
    pub player_mark: Mark,
    pub alternate_starter: bool,
    pub scores: Scores,
    pub last_move: Option<usize>,
    pub ai_state: AiState,
    pub message: Option<String>,
    /// Whether the player starts the next game (used when alternation is on)
    player_starts_next: bool,
    /// Whether the current finished game has been tallied into the score
    scored: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            level: Level::Medium,
            // X always moves first; the player takes X in the first game
            player_mark: Mark::X,
            alternate_starter: true,
            scores: Scores::default(),
            last_move: None,
            ai_state: AiState::Idle,
            message: None,
            player_starts_next: false,
            scored: false,
        }
    }

    #[inline]
    pub fn computer_mark(&self) -> Mark {
        self.player_mark.opponent()
    }

    /// Whose turn it is, derived from the board
    #[inline]
    pub fn turn(&self) -> Mark {
        rules::turn_to_move(&self.board)
    }

    pub fn game_over(&self) -> bool {
        rules::winner(&self.board).is_some() || rules::is_full(&self.board)
    }

    /// Outcome of the current game, `None` while it is still running
    pub fn outcome(&self) -> Option<GameOutcome> {
        match rules::winner(&self.board) {
            Some(mark) if mark == self.player_mark => Some(GameOutcome::PlayerWin),
            Some(_) => Some(GameOutcome::ComputerWin),
            None if rules::is_full(&self.board) => Some(GameOutcome::Draw),
            None => None,
        }
    }

    pub fn is_player_turn(&self) -> bool {
        !self.game_over() && self.turn() == self.player_mark
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.game_over() && self.turn() == self.computer_mark()
    }

    pub fn is_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// How long the computer has been "thinking"
    pub fn thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { started, .. } => Some(started.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Attempt to play the player's mark at the given cell
    pub fn try_play(&mut self, idx: usize) -> Result<(), String> {
        if self.game_over() {
            return Err("Game is over".to_string());
        }
        if self.is_thinking() {
            return Err("Computer is thinking".to_string());
        }
        if !self.is_player_turn() {
            return Err("Not your turn".to_string());
        }
        if !self.board.is_free(idx) {
            return Err("Cell is occupied".to_string());
        }

        self.execute_move(idx, self.player_mark);
        Ok(())
    }

    /// Apply a move (player or computer) and tally the score on a finished
    /// game
    fn execute_move(&mut self, idx: usize, mark: Mark) {
        self.board = rules::apply_move(&self.board, idx, mark);
        self.last_move = Some(idx);
        self.message = None;

        if !self.scored {
            match self.outcome() {
                Some(GameOutcome::PlayerWin) => {
                    self.scores.player += 1;
                    self.scored = true;
                }
                Some(GameOutcome::ComputerWin) => {
                    self.scores.computer += 1;
                    self.scored = true;
                }
                Some(GameOutcome::Draw) => {
                    self.scores.draws += 1;
                    self.scored = true;
                }
                None => {}
            }
        }
    }

    /// Start computing the computer's move on a worker thread
    pub fn start_thinking(&mut self) {
        if !self.is_computer_turn() || self.is_thinking() {
            return;
        }

        let board = self.board;
        let mark = self.computer_mark();
        let level = self.level;

        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(THINK_DELAY);
            let chosen = ai::select_move(&board, mark, level);
            // The receiver may be gone if a new game was started
            let _ = tx.send(chosen);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            started: Instant::now(),
        };
    }

    /// Poll for a finished computer move and apply it
    pub fn poll_thinking(&mut self) {
        let chosen = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(chosen) => Some(chosen),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Computer move failed".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(chosen) = chosen {
            self.ai_state = AiState::Idle;
            match chosen {
                Some(idx) if self.is_computer_turn() && self.board.is_free(idx) => {
                    self.execute_move(idx, self.computer_mark());
                }
                _ => {}
            }
        }
    }

    /// Start a new game, discarding any pending computer move.
    ///
    /// X always moves first; who starts is expressed by which mark the
    /// player holds. With alternation on, the starter flips every game.
    pub fn new_game(&mut self) {
        let player_starts = if self.alternate_starter {
            self.player_starts_next
        } else {
            self.player_mark == Mark::X
        };
        self.player_mark = if player_starts { Mark::X } else { Mark::O };
        if self.alternate_starter {
            self.player_starts_next = !player_starts;
        }

        self.board = Board::new();
        self.last_move = None;
        self.ai_state = AiState::Idle;
        self.message = None;
        self.scored = false;
    }

    pub fn reset_scores(&mut self) {
        self.scores = Scores::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_is_x_and_starts_the_first_game() {
        let state = GameState::new();
        assert_eq!(state.player_mark, Mark::X);
        assert!(state.is_player_turn());
        assert!(!state.is_computer_turn());
    }

    #[test]
    fn try_play_rejects_occupied_cell() {
        let mut state = GameState::new();
        state.try_play(4).unwrap();
        // Give the player the turn back without touching the score
        state.board = rules::apply_move(&state.board, 0, Mark::O);
        assert!(state.try_play(4).is_err());
    }

    #[test]
    fn try_play_rejects_out_of_turn_moves() {
        let mut state = GameState::new();
        state.try_play(4).unwrap();
        // Now it is the computer's turn
        assert!(state.try_play(0).is_err());
    }

    #[test]
    fn finished_game_is_tallied_exactly_once() {
        let mut state = GameState::new();
        // X wins the top row; interleave O moves on the bottom
        state.board = Board::parse("XX.....OO");
        state.execute_move(2, Mark::X);
        assert_eq!(state.scores.player, 1);
        assert_eq!(state.scores.computer, 0);

        // Further calls on the terminal board must not re-tally
        state.execute_move(3, Mark::O);
        assert_eq!(state.scores.player, 1);
    }

    #[test]
    fn draw_is_tallied_as_draw() {
        let mut state = GameState::new();
        // X O X / X O O / O X . with X to move; 8 completes a draw
        state.board = Board::parse("XOXXOOOX.");
        state.execute_move(8, Mark::X);
        assert_eq!(state.scores.draws, 1);
        assert_eq!(state.scores.player, 0);
        assert_eq!(state.scores.computer, 0);
    }

    #[test]
    fn starter_alternates_between_games() {
        let mut state = GameState::new();
        assert_eq!(state.player_mark, Mark::X);

        state.new_game();
        assert_eq!(state.player_mark, Mark::O);
        assert!(state.is_computer_turn());

        state.new_game();
        assert_eq!(state.player_mark, Mark::X);
    }

    #[test]
    fn starter_is_fixed_without_alternation() {
        let mut state = GameState::new();
        state.alternate_starter = false;
        state.new_game();
        state.new_game();
        assert_eq!(state.player_mark, Mark::X);
    }

    #[test]
    fn new_game_discards_pending_computer_move() {
        let mut state = GameState::new();
        let (tx, rx) = channel();
        state.ai_state = AiState::Thinking {
            receiver: rx,
            started: Instant::now(),
        };

        state.new_game();
        assert!(!state.is_thinking());

        // The worker's send goes nowhere and the board stays untouched
        assert!(tx.send(Some(4)).is_err());
        state.poll_thinking();
        assert!(state.board.is_board_empty());
    }

    #[test]
    fn stale_move_for_a_finished_game_is_ignored() {
        let mut state = GameState::new();
        state.board = Board::parse("XXX.OO...");
        let (tx, rx) = channel();
        state.ai_state = AiState::Thinking {
            receiver: rx,
            started: Instant::now(),
        };

        tx.send(Some(8)).unwrap();
        state.poll_thinking();
        assert!(!state.is_thinking());
        assert_eq!(state.board.get(8), None);
    }
}
