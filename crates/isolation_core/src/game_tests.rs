use super::*;
use crate::SearchResult;
use std::thread;

/// Always plays the first legal move.
struct FirstMove;

impl Agent for FirstMove {
    fn search(&mut self, board: &Board, _time_left: &dyn Fn() -> Duration) -> SearchResult {
        SearchResult {
            best_move: board.legal_moves(board.active_player()).first().copied(),
            score: 0.0,
            depth: 1,
            nodes: 1,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "first-move"
    }
}

/// Answers with a fixed move regardless of the position.
struct Stubborn(Move);

impl Agent for Stubborn {
    fn search(&mut self, _board: &Board, _time_left: &dyn Fn() -> Duration) -> SearchResult {
        SearchResult {
            best_move: Some(self.0),
            score: 0.0,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "stubborn"
    }
}

/// Sleeps past any reasonable budget before answering.
struct Sleeper;

impl Agent for Sleeper {
    fn search(&mut self, board: &Board, time_left: &dyn Fn() -> Duration) -> SearchResult {
        thread::sleep(time_left() + Duration::from_millis(5));
        FirstMove.search(board, time_left)
    }

    fn name(&self) -> &str {
        "sleeper"
    }
}

#[test]
fn test_first_move_self_play_on_strip() {
    // 1x4 strip: P1 drops on (0,0), P2 on (0,1), and player one's only
    // king step is already taken.
    let board = Board::new(4, 1).unwrap();
    let record = play_game(
        board,
        &mut FirstMove,
        &mut FirstMove,
        Duration::from_secs(1),
    );

    assert_eq!(record.history, vec![Move::new(0, 0), Move::new(0, 1)]);
    assert_eq!(record.termination, Termination::NoLegalMoves);
    assert_eq!(record.winner, Player::Two);
    assert!(record.board.is_loser(Player::One));
}

#[test]
fn test_illegal_move_forfeits() {
    let board = Board::new(3, 3).unwrap();
    let record = play_game(
        board,
        &mut Stubborn(Move::new(5, 5)),
        &mut FirstMove,
        Duration::from_secs(1),
    );

    assert!(record.history.is_empty());
    assert_eq!(record.termination, Termination::IllegalMove);
    assert_eq!(record.winner, Player::Two);
}

#[test]
fn test_timeout_forfeits() {
    let board = Board::new(3, 3).unwrap();
    let record = play_game(
        board,
        &mut FirstMove,
        &mut Sleeper,
        Duration::from_millis(10),
    );

    assert_eq!(record.history.len(), 1);
    assert_eq!(record.termination, Termination::Timeout);
    assert_eq!(record.winner, Player::One);
}
