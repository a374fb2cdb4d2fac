//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type across the crate. Every variant is
//! a recoverable, caller-facing condition whose `Display` output is the reason
//! string shown to a user. A rejected input never mutates a `Game`.
//!
//! Corrupted state (for example a board missing a king) is not represented
//! here: it is a bug in upstream state construction and panics instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Move text had the wrong length or named a square off the board.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// No legal move matches the requested squares or promotion piece.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// Several promotions share the requested squares and no valid
    /// promotion letter picked one.
    #[error("ambiguous promotion: {0}")]
    AmbiguousPromotion(String),

    /// Search was asked for a move in a terminal position.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// FEN text could not be turned into a playable position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
