use super::*;
use crate::config::Strategy;
use isolation_core::{Move, Player};
use mcts_engine::{FinalMoveRule, MctsConfig};
use minimax_engine::MinimaxConfig;

fn unlimited() -> Duration {
    Duration::from_secs(3600)
}

fn no_time() -> Duration {
    Duration::ZERO
}

fn placed(width: u8, height: u8, moves: &[Move]) -> Board {
    let mut board = Board::new(width, height).unwrap();
    for &mv in moves {
        board.apply_move(mv);
    }
    board
}

fn seeded_mcts(iterations: u64) -> TurnController {
    TurnController::new(
        AgentConfig::default().with_mcts(
            MctsConfig::default()
                .with_seed(7)
                .with_max_iterations(iterations),
        ),
    )
}

/// Opening position on 5x5 with both pieces placed, player one to move.
fn opening() -> Board {
    placed(5, 5, &[Move::new(1, 1), Move::new(3, 3)])
}

/// Reply the opponent is most likely to play from the kept tree.
fn likely_reply(controller: &TurnController) -> Move {
    let tree = controller.tree().unwrap();
    let best = tree.best_child(FinalMoveRule::MostVisits).unwrap();
    tree[best].mv.unwrap()
}

#[test]
fn test_stuck_position_returns_invalid_without_iterating() {
    let board = placed(4, 1, &[Move::new(0, 0), Move::new(0, 1)]);
    let mut controller = seeded_mcts(100);

    let result = controller.search(&board, &unlimited);
    assert_eq!(result.best_move, None);
    assert_eq!(result.nodes, 0);
    assert_eq!(controller.choose_move(&board, &unlimited), Move::INVALID);
    assert!(controller.tree().is_none());
}

#[test]
fn test_mcts_turn_returns_legal_move_and_keeps_tree() {
    let board = placed(3, 3, &[Move::new(0, 0), Move::new(2, 2)]);
    let mut controller = seeded_mcts(1000);

    let result = controller.search(&board, &unlimited);
    let mv = result.best_move.unwrap();
    assert!(board.legal_moves(Player::One).contains(&mv));
    assert_eq!(result.nodes, 1000);
    assert!(!result.stopped);
    assert!((0.0..=1.0).contains(&result.score));

    // The kept tree is rooted just after our move
    assert_eq!(controller.anchor(), Some(&board.forecast_move(mv)));
    let tree = controller.tree().unwrap();
    assert!(tree[tree.root()].visits > 0);
    assert!(tree[tree.root()].mv.is_none());
}

#[test]
fn test_out_of_time_still_answers() {
    let board = opening();
    let mut controller = seeded_mcts(1000);

    let result = controller.search(&board, &no_time);
    assert_eq!(result.nodes, 0);
    assert!(result.stopped);
    // Every child ties at zero, so the first legal move is played
    assert_eq!(result.best_move, board.legal_moves(Player::One).first().copied());
}

#[test]
fn test_tree_is_rebased_onto_opponent_reply() {
    let mut controller = seeded_mcts(2000);
    let board = opening();
    let mv = controller.choose_move(&board, &unlimited);

    let reply = likely_reply(&controller);
    let reply_visits = {
        let tree = controller.tree().unwrap();
        let id = tree.root_child(reply).unwrap();
        tree[id].visits
    };
    let next = board.forecast_move(mv).forecast_move(reply);
    assert_eq!(next.move_count(), OPENING_MOVES);

    let tree = controller.tree_for(&next);
    assert_eq!(tree[tree.root()].visits, reply_visits);
    assert!(tree[tree.root()].mv.is_none());
    assert!(tree[tree.root()].parent.is_none());
}

#[test]
fn test_second_turn_keeps_playing_from_reused_tree() {
    let mut controller = seeded_mcts(500);
    let board = opening();
    let mv = controller.choose_move(&board, &unlimited);
    let reply = likely_reply(&controller);
    let next = board.forecast_move(mv).forecast_move(reply);

    let second = controller.search(&next, &unlimited);
    let mv2 = second.best_move.unwrap();
    assert!(next.legal_moves(Player::One).contains(&mv2));
    assert_eq!(second.nodes, 500);
    assert_eq!(controller.anchor(), Some(&next.forecast_move(mv2)));
}

#[test]
fn test_unknown_reply_starts_fresh_tree() {
    let mut controller = seeded_mcts(200);
    let board = opening();
    controller.choose_move(&board, &unlimited);

    // A different game that happens to reach move four
    let other = placed(5, 5, &[Move::new(0, 0), Move::new(4, 4), Move::new(0, 1), Move::new(4, 3)]);
    let tree = controller.tree_for(&other);
    assert_eq!(tree.len(), 1);
    assert!(controller.tree().is_none());

    // Same reply square, but reached from a different history
    let mv = controller.choose_move(&board, &unlimited);
    let reply = likely_reply(&controller);
    let mut mismatched = opening();
    let detour = mismatched
        .legal_moves(Player::One)
        .into_iter()
        .find(|&m| m != mv && m != reply)
        .unwrap();
    mismatched.apply_move(detour);
    assert!(mismatched.is_legal(reply));
    mismatched.apply_move(reply);
    let tree = controller.tree_for(&mismatched);
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_opening_always_gets_fresh_tree() {
    let mut controller = seeded_mcts(200);
    let board = placed(5, 5, &[Move::new(1, 1)]);
    let mv = controller.choose_move(&board, &unlimited);
    assert!(controller.tree().is_some());

    // Move count 3 is still the opening
    let after = board.forecast_move(mv);
    let next = after.forecast_move(after.legal_moves(Player::One)[0]);
    assert!(next.move_count() < OPENING_MOVES);
    let tree = controller.tree_for(&next);
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_new_game_drops_tree() {
    let mut controller = seeded_mcts(100);
    controller.choose_move(&opening(), &unlimited);
    assert!(controller.tree().is_some());

    controller.new_game();
    assert!(controller.tree().is_none());
    assert!(controller.anchor().is_none());
}

#[test]
fn test_minimax_strategies_delegate_to_engine() {
    let board = placed(4, 4, &[Move::new(1, 1), Move::new(2, 2)]);

    for (strategy, name) in [(Strategy::Minimax, "Minimax"), (Strategy::Alphabeta, "AlphaBeta")] {
        let config = AgentConfig::default()
            .with_strategy(strategy)
            .with_minimax(MinimaxConfig::default().with_fixed_depth(2));
        let mut controller = TurnController::new(config);
        assert_eq!(controller.name(), name);

        let result = controller.search(&board, &unlimited);
        assert_eq!(result.depth, 2);
        assert!(board.legal_moves(Player::One).contains(&result.best_move.unwrap()));
        assert!(controller.tree().is_none());
    }
}

#[test]
fn test_minimax_and_alphabeta_controllers_agree() {
    let board = placed(4, 4, &[Move::new(0, 1), Move::new(3, 2), Move::new(1, 1)]);
    let minimax = MinimaxConfig::default().with_fixed_depth(3);

    let mut plain = TurnController::new(
        AgentConfig::default()
            .with_strategy(Strategy::Minimax)
            .with_minimax(minimax.clone()),
    );
    let mut pruned = TurnController::new(
        AgentConfig::default()
            .with_strategy(Strategy::Alphabeta)
            .with_minimax(minimax),
    );

    assert_eq!(
        plain.choose_move(&board, &unlimited),
        pruned.choose_move(&board, &unlimited)
    );
}

#[test]
fn test_mcts_name() {
    assert_eq!(seeded_mcts(1).name(), "MCTS");
}

#[test]
fn test_try_new_rejects_invalid_config() {
    let bad = AgentConfig::default().with_mcts(MctsConfig::default().with_exploration_constant(f64::NAN));
    assert!(matches!(TurnController::try_new(bad.clone()), Err(ConfigError::Invalid(_))));
    assert!(TurnController::try_from(bad).is_err());

    let controller = TurnController::try_new(AgentConfig::default().with_strategy(Strategy::Minimax)).unwrap();
    assert_eq!(controller.name(), "Minimax");
}
