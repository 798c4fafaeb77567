//! Error types shared by the rules and the search engines.

use thiserror::Error;

use crate::types::Move;

/// Raised from the lowest frame whose time check fails and propagated with
/// `?` up to the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search aborted: turn time budget exhausted")]
    Aborted,
}

/// Errors raised while building or mutating a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height} (each side must be 1..=8)")]
    InvalidDimensions { width: u8, height: u8 },

    #[error("illegal move {0}")]
    IllegalMove(Move),
}
