//! Minimax Isolation Engine
//!
//! Depth-bounded minimax and alpha-beta search over a static heuristic,
//! driven by iterative deepening under a turn clock.

mod search;

use std::time::Duration;

use isolation_core::{Agent, Board, HeuristicKind, SearchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use search::{iterative_deepening, DeepeningOutcome, Scored, SearchMethod, Searcher};

/// Tuning for the minimax family of strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    /// Deepen 1, 2, 3, ... until time runs out instead of a single fixed depth.
    pub iterative: bool,
    /// Depth searched when `iterative` is off.
    pub max_fixed_depth: u8,
    pub heuristic: HeuristicKind,
    /// Seed for sampling heuristics (entropy if None)
    pub seed: Option<u64>,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            iterative: true,
            max_fixed_depth: 3,
            heuristic: HeuristicKind::Improved,
            seed: None,
        }
    }
}

impl MinimaxConfig {
    /// Builder pattern: search a single fixed depth.
    pub fn with_fixed_depth(mut self, depth: u8) -> Self {
        self.iterative = false;
        self.max_fixed_depth = depth;
        self
    }

    /// Builder pattern: set the heuristic.
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Builder pattern: set the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Isolation agent running minimax or alpha-beta.
///
/// The engine keeps no state between turns apart from statistics.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    method: SearchMethod,
    config: MinimaxConfig,
    threshold: Duration,
    /// Seeds each turn's searcher
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(method: SearchMethod, config: MinimaxConfig, threshold: Duration) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            method,
            config,
            threshold,
            rng,
            nodes: 0,
        }
    }

    pub fn method(&self) -> SearchMethod {
        self.method
    }

    /// Depths to try for `board`. Each ply consumes one open cell, so
    /// searching deeper than the open cell count cannot change the result.
    fn depths(&self, board: &Board) -> std::ops::RangeInclusive<u8> {
        if self.config.iterative {
            let exhaustive = board.open_cells().popcount().clamp(1, u8::MAX as u32) as u8;
            1..=exhaustive
        } else {
            let depth = self.config.max_fixed_depth.max(1);
            depth..=depth
        }
    }
}

impl Agent for MinimaxEngine {
    fn search(&mut self, board: &Board, time_left: &dyn Fn() -> Duration) -> SearchResult {
        self.nodes = 0;

        let me = board.active_player();
        let legal = board.legal_moves(me);
        let Some(&fallback) = legal.first() else {
            return SearchResult::no_move();
        };

        let mut searcher = Searcher::new(me, self.config.heuristic, time_left, self.threshold)
            .with_seed(self.rng.gen());
        let outcome = iterative_deepening(&mut searcher, self.method, board, self.depths(board), fallback);
        self.nodes = searcher.nodes;

        debug!(
            method = ?self.method,
            depth = outcome.depth,
            score = outcome.score,
            nodes = self.nodes,
            stopped = outcome.stopped,
            best = %outcome.best_move,
            "minimax search finished"
        );

        SearchResult {
            best_move: Some(outcome.best_move),
            score: outcome.score,
            depth: outcome.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        match self.method {
            SearchMethod::Minimax => "Minimax",
            SearchMethod::AlphaBeta => "AlphaBeta",
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
