use crate::{bitboard::Bitboard, board::Board, steps::king_steps, types::*};

/// Destination cells available to `player`.
///
/// An unplaced player may drop on any open cell; a placed one takes a king
/// step onto an open cell.
#[inline]
pub fn legal_move_mask(board: &Board, player: Player) -> Bitboard {
    let open = board.open_cells();
    match board.location_square(player) {
        None => open,
        Some(from) => king_steps(from) & open,
    }
}

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut out = Vec::with_capacity(8);
    legal_moves_into(board, player, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(board: &Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    out.extend(legal_move_mask(board, player).map(Move::from_square));
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
