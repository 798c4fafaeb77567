use std::fmt;

use crate::bitboard::Bitboard;
use crate::error::BoardError;
use crate::movegen::{legal_move_mask, legal_moves};
use crate::types::*;

/// A king-move isolation position.
///
/// Each player first places its piece on any open cell, then moves one king
/// step per turn. Every cell a piece has stood on stays blocked for the rest
/// of the game. The side to move with no legal move loses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    mask: Bitboard,
    blocked: Bitboard,
    locations: [Option<u8>; 2],
    active: Player,
    move_count: u32,
}

impl Default for Board {
    fn default() -> Self {
        let side = Self::DEFAULT_SIDE;
        Self::empty(side, side)
    }
}

impl Board {
    pub const DEFAULT_SIDE: u8 = 7;

    /// Create an empty board with player one to move.
    pub fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        if !(1..=MAX_SIDE).contains(&width) || !(1..=MAX_SIDE).contains(&height) {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self::empty(width, height))
    }

    fn empty(width: u8, height: u8) -> Self {
        Board {
            width,
            height,
            mask: Bitboard::board_mask(width, height),
            blocked: Bitboard::EMPTY,
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of plies played so far, placements included.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn inactive_player(&self) -> Player {
        self.active.other()
    }

    pub fn opponent(&self, player: Player) -> Player {
        player.other()
    }

    /// Current cell of `player`, or None before its placement.
    pub fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.idx()].map(Move::from_square)
    }

    pub(crate) fn location_square(&self, player: Player) -> Option<u8> {
        self.locations[player.idx()]
    }

    /// Cells that are on the board and have never been occupied.
    #[inline]
    pub fn open_cells(&self) -> Bitboard {
        self.mask & !self.blocked
    }

    pub fn is_open(&self, mv: Move) -> bool {
        mv.square().is_some_and(|sq| self.open_cells().contains(sq))
    }

    /// Legal moves for `player` in ascending cell order.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        legal_moves(self, player)
    }

    pub fn has_legal_moves(&self, player: Player) -> bool {
        !legal_move_mask(self, player).is_empty()
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        mv.square()
            .is_some_and(|sq| legal_move_mask(self, self.active).contains(sq))
    }

    /// Play `mv` for the active player in place.
    ///
    /// The move is trusted to be legal; rollouts call this with moves taken
    /// straight from move generation. Use [`Board::try_apply_move`] for
    /// untrusted input.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert!(self.is_legal(mv), "illegal move {mv} applied");
        let Some(sq) = mv.square() else {
            return;
        };
        self.blocked.set(sq);
        self.locations[self.active.idx()] = Some(sq);
        self.active = self.active.other();
        self.move_count += 1;
    }

    /// Play `mv` after checking it against the legal moves of the side to move.
    pub fn try_apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.is_legal(mv) {
            return Err(BoardError::IllegalMove(mv));
        }
        self.apply_move(mv);
        Ok(())
    }

    /// Return the position after `mv` without touching `self`.
    pub fn forecast_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    /// True when the side to move is stuck.
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_moves(self.active)
    }

    pub fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.is_terminal()
    }

    pub fn is_winner(&self, player: Player) -> bool {
        player != self.active && self.is_terminal()
    }

    /// Game value for `player`: `+inf` for a won game, `-inf` for a lost
    /// one, `0` while the game is still running.
    pub fn utility(&self, player: Player) -> f64 {
        if !self.is_terminal() {
            0.0
        } else if player == self.active {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as i8 {
            for col in 0..self.width as i8 {
                let Some(cell) = sq(row, col) else {
                    continue;
                };
                let glyph = if self.locations[0] == Some(cell) {
                    '1'
                } else if self.locations[1] == Some(cell) {
                    '2'
                } else if self.blocked.contains(cell) {
                    '-'
                } else {
                    '.'
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
