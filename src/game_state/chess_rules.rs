//! Canonical chess-rule constants.
//!
//! Starting position and the fixed squares involved in castling.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Fixed squares for one castling option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingSquares {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; must all be empty.
    pub between: &'static [Square],
    /// Squares the king passes over including its destination; must not be attacked.
    pub king_path: &'static [Square],
}

pub const WHITE_KING_SIDE: CastlingSquares = CastlingSquares {
    king_from: 4,
    king_to: 6,
    rook_from: 7,
    rook_to: 5,
    between: &[5, 6],
    king_path: &[5, 6],
};

pub const WHITE_QUEEN_SIDE: CastlingSquares = CastlingSquares {
    king_from: 4,
    king_to: 2,
    rook_from: 0,
    rook_to: 3,
    between: &[1, 2, 3],
    king_path: &[3, 2],
};

pub const BLACK_KING_SIDE: CastlingSquares = CastlingSquares {
    king_from: 60,
    king_to: 62,
    rook_from: 63,
    rook_to: 61,
    between: &[61, 62],
    king_path: &[61, 62],
};

pub const BLACK_QUEEN_SIDE: CastlingSquares = CastlingSquares {
    king_from: 60,
    king_to: 58,
    rook_from: 56,
    rook_to: 59,
    between: &[57, 58, 59],
    king_path: &[59, 58],
};

#[inline]
pub const fn king_side_castling(color: Color) -> CastlingSquares {
    match color {
        Color::White => WHITE_KING_SIDE,
        Color::Black => BLACK_KING_SIDE,
    }
}

#[inline]
pub const fn queen_side_castling(color: Color) -> CastlingSquares {
    match color {
        Color::White => WHITE_QUEEN_SIDE,
        Color::Black => BLACK_QUEEN_SIDE,
    }
}

/// Castling option whose king destination is `king_to`.
pub fn castling_for_king_target(king_to: Square) -> Option<CastlingSquares> {
    [
        WHITE_KING_SIDE,
        WHITE_QUEEN_SIDE,
        BLACK_KING_SIDE,
        BLACK_QUEEN_SIDE,
    ]
    .into_iter()
    .find(|c| c.king_to == king_to)
}

/// Rank index a pawn of `color` starts on.
#[inline]
pub const fn pawn_home_rank(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Rank index on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Rank step of a pawn push for `color`.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}
