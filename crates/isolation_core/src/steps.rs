//! Pre-computed king-step tables.
//!
//! The tables are built for the full 8x8 grid; callers intersect the result
//! with the board mask and the open cells of the current position.

use crate::bitboard::Bitboard;

/// Pre-computed king steps for each cell.
pub static KING_STEPS: [Bitboard; 64] = {
    let mut steps = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_square(sq);

        let mut result = 0u64;

        // All 8 directions
        result |= bb.0 << 8; // Down a row
        result |= bb.0 >> 8; // Up a row
        result |= (bb.0 << 1) & Bitboard::NOT_COL_0.0; // Right
        result |= (bb.0 >> 1) & Bitboard::NOT_COL_7.0; // Left
        result |= (bb.0 << 9) & Bitboard::NOT_COL_0.0; // Down-right
        result |= (bb.0 << 7) & Bitboard::NOT_COL_7.0; // Down-left
        result |= (bb.0 >> 7) & Bitboard::NOT_COL_0.0; // Up-right
        result |= (bb.0 >> 9) & Bitboard::NOT_COL_7.0; // Up-left

        steps[sq as usize] = Bitboard(result);
        sq += 1;
    }
    steps
};

/// Get king steps for a given cell.
#[inline(always)]
pub fn king_steps(sq: u8) -> Bitboard {
    KING_STEPS[sq as usize]
}
