//! Pluggable static evaluation.
//!
//! Search delegates leaf scoring to [`BoardScorer`] so heuristics can be
//! swapped without touching the search code.

use crate::game_state::{chess_types::*, position::Position};

/// Base score of a mated side; the ply distance is added back so shorter
/// mates rank higher.
pub const MATE_SCORE: i32 = 100_000;
/// Bound used for the initial search window.
pub const SCORE_INFINITY: i32 = 1_000_000;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, position: &Position) -> i32;
}

/// Small bonus for occupying the middle of the board, indexed by square.
#[rustfmt::skip]
pub const CENTER_BONUS: [i32; 64] = [
    0, 0,  0,  0,  0,  0, 0, 0,
    0, 5,  5,  5,  5,  5, 5, 0,
    0, 5, 10, 15, 15, 10, 5, 0,
    0, 5, 15, 25, 25, 15, 5, 0,
    0, 5, 15, 25, 25, 15, 5, 0,
    0, 5, 10, 15, 15, 10, 5, 0,
    0, 5,  5,  5,  5,  5, 5, 0,
    0, 0,  0,  0,  0,  0, 0, 0,
];

/// Material plus [`CENTER_BONUS`] for every piece except the king.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialPositionalScorer;

impl MaterialPositionalScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20_000,
        }
    }

    pub fn white_minus_black(board: &Board) -> i32 {
        board
            .pieces()
            .map(|(square, piece)| {
                let mut value = Self::piece_value(piece.kind);
                if piece.kind != PieceKind::King {
                    value += CENTER_BONUS[usize::from(square)];
                }
                match piece.color {
                    Color::White => value,
                    Color::Black => -value,
                }
            })
            .sum()
    }
}

impl BoardScorer for MaterialPositionalScorer {
    fn score(&self, position: &Position) -> i32 {
        let white_minus_black = Self::white_minus_black(position.board());
        match position.side_to_move() {
            Color::White => white_minus_black,
            Color::Black => -white_minus_black,
        }
    }
}
