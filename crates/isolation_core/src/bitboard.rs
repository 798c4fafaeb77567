//! Bitboard representation of the isolation grid.
//!
//! A bitboard is a 64-bit integer where each bit represents a cell.
//! Bit `row * 8 + col` holds cell `(row, col)`; boards narrower or shorter
//! than 8 simply leave the outer bits unused and mask them out.

use std::ops::{BitAnd, BitOr, Not};

use crate::types::{MAX_SIDE, STRIDE};

/// A set of cells on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    pub const COL_0: Bitboard = Bitboard(0x0101010101010101);
    // Stop horizontal steps from wrapping onto the next row
    pub const NOT_COL_0: Bitboard = Bitboard(!Self::COL_0.0);
    pub const NOT_COL_7: Bitboard = Bitboard(!(Self::COL_0.0 << 7));

    /// Create a bitboard with a single cell set.
    #[inline(always)]
    pub const fn from_square(sq: u8) -> Self {
        Bitboard(1u64 << sq)
    }

    /// Mask of every cell inside a `width` x `height` board.
    pub const fn board_mask(width: u8, height: u8) -> Self {
        let mut mask = 0u64;
        let mut row = 0u8;
        while row < height && row < MAX_SIDE {
            let mut col = 0u8;
            while col < width && col < MAX_SIDE {
                mask |= 1u64 << (row * STRIDE + col);
                col += 1;
            }
            row += 1;
        }
        Bitboard(mask)
    }

    /// Check if the bitboard is empty.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if a specific cell is set.
    #[inline(always)]
    pub const fn contains(self, sq: u8) -> bool {
        (self.0 & (1u64 << sq)) != 0
    }

    #[inline(always)]
    pub fn set(&mut self, sq: u8) {
        self.0 |= 1u64 << sq;
    }

    /// Count the number of set bits (population count).
    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Get and remove the least significant bit. Returns the cell index.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            let sq = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1; // Clear the LSB
            Some(sq)
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

/// Iterator over set bits in a bitboard, lowest cell first.
impl Iterator for Bitboard {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lsb()
    }
}

#[cfg(test)]
#[path = "bitboard_tests.rs"]
mod bitboard_tests;
