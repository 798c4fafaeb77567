//! Static and sampled heuristics.
//!
//! Every heuristic scores a position for `player`, returning `+inf` for a
//! won game and `-inf` for a lost one so that terminal states order above and
//! below every non-terminal score.
//!
//! The plain scorers are pure functions of the board. [`mcs_score`] and
//! [`depth_score`] do real work per call and poll the turn clock, so search
//! reaches them through the fallible [`HeuristicKind::evaluate`].

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bitboard::Bitboard;
use crate::error::SearchError;
use crate::steps::king_steps;
use crate::time_control::{check_time, TimeLeft};
use crate::{board::Board, types::Player};

/// Plain scoring callable for heuristics that never touch the clock.
pub type Heuristic = fn(&Board, Player) -> f64;

/// Playouts sampled by one [`mcs_score`] call.
pub const MCS_PLAYOUTS: u32 = 50;

/// Wall time one [`mcs_score`] call may spend sampling.
pub const MCS_BUDGET: Duration = Duration::from_millis(2);

fn terminal_score(board: &Board, player: Player) -> Option<f64> {
    if board.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if board.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

fn mobility(board: &Board, player: Player) -> f64 {
    board.legal_moves(player).len() as f64
}

/// Cells neither player has stood on, counting both current locations as
/// taken even before they are placed.
fn blank_spaces(board: &Board) -> f64 {
    let area = board.width() as f64 * board.height() as f64;
    area - board.move_count() as f64 - 2.0
}

/// Uninformative outside terminal states.
pub fn null_score(board: &Board, player: Player) -> f64 {
    terminal_score(board, player).unwrap_or(0.0)
}

/// Number of moves open to `player`.
pub fn open_move_score(board: &Board, player: Player) -> f64 {
    terminal_score(board, player).unwrap_or_else(|| mobility(board, player))
}

/// Own mobility minus opponent mobility.
pub fn improved_score(board: &Board, player: Player) -> f64 {
    terminal_score(board, player).unwrap_or_else(|| {
        mobility(board, player) - mobility(board, board.opponent(player))
    })
}

/// Blank cells minus opponent mobility; favours boxing the opponent in.
pub fn aggressive_score(board: &Board, player: Player) -> f64 {
    terminal_score(board, player)
        .unwrap_or_else(|| blank_spaces(board) - mobility(board, board.opponent(player)))
}

/// Own mobility weighted by how much room the opponent lacks.
pub fn balanced_score(board: &Board, player: Player) -> f64 {
    terminal_score(board, player).unwrap_or_else(|| {
        mobility(board, player) * (blank_spaces(board) - mobility(board, board.opponent(player)))
    })
}

/// Monte-Carlo sampling: the share of uniformly random playouts from `board`
/// that `player` wins.
///
/// Runs at most [`MCS_PLAYOUTS`] playouts within [`MCS_BUDGET`] of wall time
/// and divides by one more than the playout count, so the score stays below
/// one and a call that sampled nothing scores zero.
///
/// # Errors
/// [`SearchError::Aborted`] once `time_left()` drops below `threshold`
/// before a playout.
pub fn mcs_score<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
    time_left: TimeLeft<'_>,
    threshold: Duration,
) -> Result<f64, SearchError> {
    if let Some(score) = terminal_score(board, player) {
        return Ok(score);
    }

    let start = time_left();
    let mut wins = 0u32;
    let mut playouts = 0u32;
    while playouts < MCS_PLAYOUTS && start.saturating_sub(time_left()) < MCS_BUDGET {
        check_time(time_left, threshold)?;

        let mut sim = board.clone();
        while let Some(&mv) = sim.legal_moves(sim.active_player()).choose(rng) {
            sim.apply_move(mv);
        }
        if sim.inactive_player() == player {
            wins += 1;
        }
        playouts += 1;
    }

    Ok(wins as f64 / (playouts + 1) as f64)
}

/// Length of the longest king walk `player` could still make over open
/// cells, ignoring the opponent.
///
/// A stuck player scores `-inf` even when it is not yet to move, and a player
/// facing a stuck opponent scores `+inf`. Before placement every open cell is
/// reachable, so the open cell count is returned.
///
/// # Errors
/// The walk enumeration is exponential and polls the clock at every step;
/// [`SearchError::Aborted`] once `time_left()` drops below `threshold`.
pub fn depth_score(
    board: &Board,
    player: Player,
    time_left: TimeLeft<'_>,
    threshold: Duration,
) -> Result<f64, SearchError> {
    if let Some(score) = terminal_score(board, player) {
        return Ok(score);
    }
    if !board.has_legal_moves(player) {
        return Ok(f64::NEG_INFINITY);
    }
    if !board.has_legal_moves(board.opponent(player)) {
        return Ok(f64::INFINITY);
    }

    let open = board.open_cells();
    match board.location_square(player) {
        Some(from) => Ok(longest_walk(from, open, time_left, threshold)? as f64),
        None => Ok(open.popcount() as f64),
    }
}

fn longest_walk(
    from: u8,
    open: Bitboard,
    time_left: TimeLeft<'_>,
    threshold: Duration,
) -> Result<u32, SearchError> {
    check_time(time_left, threshold)?;

    let mut longest = 0;
    for next in king_steps(from) & open {
        let rest = open & !Bitboard::from_square(next);
        longest = longest.max(1 + longest_walk(next, rest, time_left, threshold)?);
    }
    Ok(longest)
}

/// Configurable choice of heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    Null,
    OpenMove,
    #[default]
    Improved,
    Aggressive,
    Balanced,
    /// Random playout sampling, see [`mcs_score`].
    Mcs,
    /// Longest open walk, see [`depth_score`].
    Depth,
}

impl HeuristicKind {
    /// Score `board` for `player`.
    ///
    /// Only [`HeuristicKind::Mcs`] draws from `rng`, and only it and
    /// [`HeuristicKind::Depth`] poll `time_left`.
    pub fn evaluate<R: Rng + ?Sized>(
        self,
        board: &Board,
        player: Player,
        rng: &mut R,
        time_left: TimeLeft<'_>,
        threshold: Duration,
    ) -> Result<f64, SearchError> {
        let score: Heuristic = match self {
            HeuristicKind::Null => null_score,
            HeuristicKind::OpenMove => open_move_score,
            HeuristicKind::Improved => improved_score,
            HeuristicKind::Aggressive => aggressive_score,
            HeuristicKind::Balanced => balanced_score,
            HeuristicKind::Mcs => return mcs_score(board, player, rng, time_left, threshold),
            HeuristicKind::Depth => return depth_score(board, player, time_left, threshold),
        };
        Ok(score(board, player))
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
