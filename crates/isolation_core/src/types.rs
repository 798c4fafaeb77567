use std::fmt;

/// Cells are packed into a bitboard with a fixed row stride of 8.
pub const STRIDE: u8 = 8;
/// Largest supported board side.
pub const MAX_SIDE: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}
impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// Destination cell of a move. The same type names a placement during the
/// opening and a king step afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: i8,
    pub col: i8,
}

impl Move {
    /// Returned by agents when the side to move has no legal move.
    pub const INVALID: Move = Move { row: -1, col: -1 };

    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_valid(self) -> bool {
        self.row >= 0 && self.col >= 0
    }

    /// Bit index of the destination cell, or None for off-grid coordinates.
    pub fn square(self) -> Option<u8> {
        sq(self.row, self.col)
    }

    pub fn from_square(sq: u8) -> Self {
        Self {
            row: row_of(sq),
            col: col_of(sq),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// Helpers
pub fn col_of(sq: u8) -> i8 {
    (sq % STRIDE) as i8
}
pub fn row_of(sq: u8) -> i8 {
    (sq / STRIDE) as i8
}
pub fn sq(row: i8, col: i8) -> Option<u8> {
    if (0..MAX_SIDE as i8).contains(&row) && (0..MAX_SIDE as i8).contains(&col) {
        Some((row as u8) * STRIDE + (col as u8))
    } else {
        None
    }
}
