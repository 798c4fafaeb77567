//! MCTS iteration: selection, path replay, expansion, rollout and
//! backpropagation.
//!
//! All scores are in [0, 1]. A rollout scores 1 when the player who made the
//! move into the rollout's start node ends up winning.

use std::time::Duration;

use isolation_core::{check_time, open_move_score, Board, Move, SearchError, TimeLeft};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::config::{MctsConfig, RolloutPolicy};
use crate::tree::SearchTree;

/// Iterations completed by one call to [`run_iterations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationReport {
    pub iterations: u64,
    /// True if an iteration was abandoned because time ran out
    pub stopped: bool,
}

/// Play `board` out to the end with `policy`.
///
/// Returns 1.0 if the player inactive in `board` wins, 0.0 otherwise. The
/// clock is polled before every move; on abort nothing has been recorded.
pub fn rollout<R: Rng + ?Sized>(
    board: &Board,
    policy: RolloutPolicy,
    rng: &mut R,
    time_left: TimeLeft<'_>,
    threshold: Duration,
) -> Result<f64, SearchError> {
    let player = board.inactive_player();
    let mut sim = board.clone();

    loop {
        let moves = sim.legal_moves(sim.active_player());
        let next = match policy {
            RolloutPolicy::Random => moves.choose(rng).copied(),
            RolloutPolicy::Greedy => greedy_move(&sim, &moves),
        };
        let Some(mv) = next else {
            break;
        };
        check_time(time_left, threshold)?;
        sim.apply_move(mv);
    }

    // The side to move is stuck, so the other one won
    Ok(if sim.inactive_player() == player { 1.0 } else { 0.0 })
}

/// Move maximizing the mover's own mobility afterwards, first maximum.
fn greedy_move(board: &Board, moves: &[Move]) -> Option<Move> {
    let mover = board.active_player();
    let mut best: Option<(Move, f64)> = None;
    for &mv in moves {
        let score = open_move_score(&board.forecast_move(mv), mover);
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

/// Run one iteration against `tree`, whose root sits at `anchor`.
///
/// On `Err(Aborted)` the statistics are untouched; the selected node may
/// have been expanded.
pub fn iterate<R: Rng + ?Sized>(
    tree: &mut SearchTree,
    anchor: &Board,
    config: &MctsConfig,
    rng: &mut R,
    time_left: TimeLeft<'_>,
    threshold: Duration,
) -> Result<(), SearchError> {
    let leaf = tree.select(config.exploration_constant);

    let mut board = anchor.clone();
    for mv in tree.path_moves(leaf) {
        board.apply_move(mv);
    }
    tree.expand(leaf, &board);

    let start = tree[leaf].children.choose(rng).copied();
    let Some(start) = start else {
        // Stuck side to move: the player who moved into the leaf won
        tree.backpropagate(leaf, 1.0);
        return Ok(());
    };
    if let Some(mv) = tree[start].mv {
        board.apply_move(mv);
    }

    let playouts = config.rollouts_per_iteration.max(1);
    let mut wins = 0.0;
    for _ in 0..playouts {
        wins += rollout(&board, config.rollout_policy, rng, time_left, threshold)?;
    }
    tree.backpropagate(start, wins / playouts as f64);
    Ok(())
}

/// Iterate while `time_left()` stays above `threshold` and the configured
/// iteration cap has not been reached.
pub fn run_iterations<R: Rng + ?Sized>(
    tree: &mut SearchTree,
    anchor: &Board,
    config: &MctsConfig,
    rng: &mut R,
    time_left: TimeLeft<'_>,
    threshold: Duration,
) -> IterationReport {
    let mut report = IterationReport {
        iterations: 0,
        stopped: false,
    };

    while time_left() > threshold {
        if config.max_iterations.is_some_and(|max| report.iterations >= max) {
            return report;
        }
        match iterate(tree, anchor, config, rng, time_left, threshold) {
            Ok(()) => report.iterations += 1,
            Err(SearchError::Aborted) => {
                trace!(iterations = report.iterations, "iteration aborted");
                report.stopped = true;
                return report;
            }
        }
    }

    report.stopped = true;
    report
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
