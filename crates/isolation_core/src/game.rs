//! Single-game runner: plays two agents against each other with a per-move
//! clock, the way the rules referee would.

use std::time::Duration;

use tracing::debug;

use crate::{board::Board, time_control::TurnClock, types::*, Agent};

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The side to move had no legal move.
    NoLegalMoves,
    /// The side to move answered with a move that is not legal.
    IllegalMove,
    /// The side to move used more than its per-move budget.
    Timeout,
}

/// Outcome of one game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Player,
    pub history: Vec<Move>,
    pub termination: Termination,
    /// Final position.
    pub board: Board,
}

/// Play `board` to completion. `first` moves for player one, `second` for
/// player two; each move gets a fresh clock of `move_time`.
pub fn play_game(
    mut board: Board,
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    move_time: Duration,
) -> GameRecord {
    first.new_game();
    second.new_game();
    let mut history = Vec::new();

    loop {
        let mover = board.active_player();
        let agent: &mut dyn Agent = match mover {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };

        // Create a fresh clock for each move
        let clock = TurnClock::start(move_time);
        let time_left = || clock.remaining();
        let mv = agent.choose_move(&board, &time_left);

        let termination = if clock.expired() {
            Some(Termination::Timeout)
        } else if board.is_terminal() {
            Some(Termination::NoLegalMoves)
        } else if !board.is_legal(mv) {
            Some(Termination::IllegalMove)
        } else {
            None
        };

        if let Some(termination) = termination {
            debug!(
                agent = agent.name(),
                %mover,
                plies = history.len(),
                ?termination,
                "game over"
            );
            return GameRecord {
                winner: mover.other(),
                history,
                termination,
                board,
            };
        }

        board.apply_move(mv);
        history.push(mv);
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
