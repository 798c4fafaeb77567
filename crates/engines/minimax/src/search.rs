//! Depth-bounded minimax with optional alpha-beta pruning.
//!
//! Scores are always from the root player's point of view: maximizing
//! frames belong to the root player, minimizing frames to the opponent.

use std::time::Duration;

use isolation_core::{check_time, Board, HeuristicKind, Move, Player, SearchError, TimeLeft};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Which recursion the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    Minimax,
    AlphaBeta,
}

/// Result of a completed depth: the score and the move that achieves it.
pub type Scored = (f64, Move);

/// One search over a fixed root, sharing the clock and node counter between
/// recursive frames.
pub struct Searcher<'a> {
    player: Player,
    heuristic: HeuristicKind,
    time_left: TimeLeft<'a>,
    threshold: Duration,
    /// Feeds sampling heuristics
    rng: StdRng,
    /// Nodes entered so far, aborted depths included.
    pub nodes: u64,
}

impl<'a> Searcher<'a> {
    /// # Arguments
    /// * `player` - The root player; heuristics and utilities score for it
    /// * `heuristic` - Leaf evaluation applied one ply above the horizon
    /// * `time_left` - Remaining-time query polled at every node and leaf
    /// * `threshold` - Abort once `time_left()` drops below this
    pub fn new(
        player: Player,
        heuristic: HeuristicKind,
        time_left: TimeLeft<'a>,
        threshold: Duration,
    ) -> Self {
        Self {
            player,
            heuristic,
            time_left,
            threshold,
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Builder pattern: reproducible sampling heuristics.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Score a leaf child for the root player. The clock is polled first so
    /// a run of expensive evaluations cannot outlast the turn.
    fn evaluate(&mut self, board: &Board) -> Result<f64, SearchError> {
        check_time(self.time_left, self.threshold)?;
        self.heuristic
            .evaluate(board, self.player, &mut self.rng, self.time_left, self.threshold)
    }

    /// Run `method` to `depth` from `board`, which must have the root player
    /// to move.
    pub fn run(&mut self, method: SearchMethod, board: &Board, depth: u8) -> Result<Scored, SearchError> {
        match method {
            SearchMethod::Minimax => self.minimax(board, depth, true),
            SearchMethod::AlphaBeta => {
                self.alphabeta(board, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        }
    }

    /// Plain depth-limited minimax.
    ///
    /// Returns `(utility, Move::INVALID)` when the side to move is stuck.
    pub fn minimax(&mut self, board: &Board, depth: u8, maximizing: bool) -> Result<Scored, SearchError> {
        check_time(self.time_left, self.threshold)?;
        self.nodes += 1;

        let moves = board.legal_moves(board.active_player());
        if moves.is_empty() {
            return Ok((board.utility(self.player), Move::INVALID));
        }

        let mut best: Option<Scored> = None;
        for mv in moves {
            let child = board.forecast_move(mv);
            let score = if depth < 2 {
                self.evaluate(&child)?
            } else {
                self.minimax(&child, depth - 1, !maximizing)?.0
            };
            if improves(best, score, maximizing) {
                best = Some((score, mv));
            }
        }

        Ok(best.unwrap_or((board.utility(self.player), Move::INVALID)))
    }

    /// Minimax with alpha-beta pruning. Returns the same move and score as
    /// [`Searcher::minimax`] at the root.
    pub fn alphabeta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> Result<Scored, SearchError> {
        check_time(self.time_left, self.threshold)?;
        self.nodes += 1;

        let moves = board.legal_moves(board.active_player());
        if moves.is_empty() {
            return Ok((board.utility(self.player), Move::INVALID));
        }

        let mut best: Option<Scored> = None;
        for mv in moves {
            let child = board.forecast_move(mv);
            let score = if depth < 2 {
                self.evaluate(&child)?
            } else {
                self.alphabeta(&child, depth - 1, alpha, beta, !maximizing)?.0
            };
            if improves(best, score, maximizing) {
                best = Some((score, mv));
            }

            if maximizing {
                if score >= beta {
                    break; // Beta cutoff
                }
                alpha = alpha.max(score);
            } else {
                if score <= alpha {
                    break; // Alpha cutoff
                }
                beta = beta.min(score);
            }
        }

        Ok(best.unwrap_or((board.utility(self.player), Move::INVALID)))
    }
}

/// First-encountered extremum wins ties.
#[inline]
fn improves(best: Option<Scored>, score: f64, maximizing: bool) -> bool {
    match best {
        None => true,
        Some((b, _)) if maximizing => score > b,
        Some((b, _)) => score < b,
    }
}

/// Outcome of an iterative-deepening run.
#[derive(Debug, Clone)]
pub struct DeepeningOutcome {
    /// Move from the deepest completed depth, or the fallback move.
    pub best_move: Move,
    pub score: f64,
    /// Deepest fully completed depth (0 if none completed)
    pub depth: u8,
    /// True if a depth was abandoned because time ran out
    pub stopped: bool,
}

/// Search `depths` in order, keeping the deepest fully completed result.
///
/// `fallback` is returned untouched if not even the first depth completes.
/// An aborted depth never overwrites an earlier result. The loop also ends
/// once a completed depth proves a win or a loss.
pub fn iterative_deepening(
    searcher: &mut Searcher<'_>,
    method: SearchMethod,
    board: &Board,
    depths: impl IntoIterator<Item = u8>,
    fallback: Move,
) -> DeepeningOutcome {
    let mut outcome = DeepeningOutcome {
        best_move: fallback,
        score: f64::NEG_INFINITY,
        depth: 0,
        stopped: false,
    };

    for depth in depths {
        match searcher.run(method, board, depth) {
            Ok((score, mv)) => {
                trace!(depth, score, %mv, nodes = searcher.nodes, "depth completed");
                outcome.best_move = mv;
                outcome.score = score;
                outcome.depth = depth;
                if score.is_infinite() {
                    break;
                }
            }
            Err(SearchError::Aborted) => {
                trace!(depth, nodes = searcher.nodes, "depth aborted");
                outcome.stopped = true;
                break;
            }
        }
    }

    outcome
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
