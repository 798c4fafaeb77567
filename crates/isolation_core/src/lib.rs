pub mod bitboard;
pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod steps;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use bitboard::*;
pub use board::*;
pub use error::*;
pub use eval::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;

use std::time::Duration;

// =============================================================================
// Agent trait: implemented by every player (minimax, MCTS, baselines)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score of the best move from the mover's perspective
    pub score: f64,
    /// Deepest fully completed search depth (0 for engines without depth)
    pub depth: u8,
    /// Nodes visited by minimax, iterations run by MCTS
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

impl SearchResult {
    /// Result for a position where the side to move is stuck.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: f64::NEG_INFINITY,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Trait that all isolation agents must implement.
///
/// This allows swapping between minimax, alpha-beta, MCTS and the baseline
/// players behind one interface.
pub trait Agent {
    /// Search the position until the search is exhaustive or `time_left`
    /// runs low.
    ///
    /// # Arguments
    /// * `board` - The current position; the agent plays the active player
    /// * `time_left` - Query for the time remaining in this turn
    fn search(&mut self, board: &Board, time_left: &dyn Fn() -> Duration) -> SearchResult;

    /// Pick a move, or [`Move::INVALID`] when no legal move exists.
    fn choose_move(&mut self, board: &Board, time_left: &dyn Fn() -> Duration) -> Move {
        self.search(board, time_left)
            .best_move
            .unwrap_or(Move::INVALID)
    }

    /// Returns the agent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game (drop search trees, counters, etc.)
    fn new_game(&mut self) {}
}
