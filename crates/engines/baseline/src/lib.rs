//! Baseline Isolation Agents
//!
//! Two simple players used as opponents:
//! - [`RandomAgent`] selects moves uniformly at random from all legal moves.
//! - [`GreedyAgent`] plays the move with the best one-ply heuristic score
//!   (a depth-one search).
//!
//! Any real search agent should easily beat both.

use std::time::Duration;

use isolation_core::{open_move_score, Agent, Board, Heuristic, Move, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An agent that plays random legal moves.
///
/// This agent provides no evaluation - it simply picks a random move from
/// all available legal moves.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move sequence for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn search(&mut self, board: &Board, _time_left: &dyn Fn() -> Duration) -> SearchResult {
        let moves = board.legal_moves(board.active_player());
        let best_move = moves.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: 1,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// An agent that maximises a heuristic one ply ahead.
#[derive(Clone, Copy)]
pub struct GreedyAgent {
    score: Heuristic,
}

impl GreedyAgent {
    pub fn new(score: Heuristic) -> Self {
        Self { score }
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new(open_move_score)
    }
}

impl Agent for GreedyAgent {
    fn search(&mut self, board: &Board, _time_left: &dyn Fn() -> Duration) -> SearchResult {
        let me = board.active_player();
        let moves = board.legal_moves(me);

        let mut best: Option<(Move, f64)> = None;
        for mv in moves.iter().copied() {
            let score = (self.score)(&board.forecast_move(mv), me);
            // First maximum wins ties
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((mv, score));
            }
        }

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, s)| s).unwrap_or(f64::NEG_INFINITY),
            depth: 1,
            nodes: moves.len() as u64,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
