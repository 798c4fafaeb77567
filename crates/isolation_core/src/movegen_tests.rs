use super::*;

#[test]
fn test_opening_moves_cover_every_cell() {
    let board = Board::new(7, 7).unwrap();
    let moves = legal_moves(&board, Player::One);
    // Empty 7x7 board: the first placement may go anywhere
    assert_eq!(moves.len(), 49);
    assert_eq!(moves[0], Move::new(0, 0));
    assert_eq!(moves[48], Move::new(6, 6));
}

#[test]
fn test_king_steps_after_placement() {
    let mut board = Board::new(3, 3).unwrap();
    board.apply_move(Move::new(0, 0));
    board.apply_move(Move::new(2, 2));

    let moves = legal_moves(&board, Player::One);
    assert_eq!(moves, vec![Move::new(0, 1), Move::new(1, 0), Move::new(1, 1)]);

    let moves = legal_moves(&board, Player::Two);
    assert_eq!(moves, vec![Move::new(1, 1), Move::new(1, 2), Move::new(2, 1)]);
}

#[test]
fn test_buffer_is_reused() {
    let board = Board::new(2, 2).unwrap();
    let mut buf = vec![Move::INVALID; 10];
    legal_moves_into(&board, Player::One, &mut buf);
    assert_eq!(buf.len(), 4);
}
