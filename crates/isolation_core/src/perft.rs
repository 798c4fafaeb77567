use crate::{board::Board, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all move sequences of exactly `depth` plies from the current
/// position; lines that end early because a player is stuck are not counted.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        legal_moves_into(board, board.active_player(), buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            nodes += inner(&board.forecast_move(mv), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(8); depth as usize];
    inner(board, depth, &mut layers[..])
}
