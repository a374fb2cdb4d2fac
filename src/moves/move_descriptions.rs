//! Move and move-outcome descriptions.
//!
//! A [`Move`] names its squares, the moving piece, an optional promotion, and
//! whether it is a special move. [`MoveResult`] is derived after applying it.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_name;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MoveType {
    #[default]
    Normal,
    Castling,
    EnPassant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub promotion: Option<PieceKind>,
    pub move_type: MoveType,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, piece: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            promotion: None,
            move_type: MoveType::Normal,
        }
    }

    #[inline]
    pub const fn with_promotion(mut self, promotion: PieceKind) -> Self {
        self.promotion = Some(promotion);
        self
    }

    #[inline]
    pub const fn with_type(mut self, move_type: MoveType) -> Self {
        self.move_type = move_type;
        self
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.move_type == MoveType::Castling
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.move_type == MoveType::EnPassant
    }
}

/// Long algebraic form, e.g. `e2e4` or `a7a8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.from), square_name(self.to))?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Descriptive flags computed after a move has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub mv: Move,
    pub was_capture: bool,
    pub was_check: bool,
    pub was_checkmate: bool,
    pub was_castle: bool,
    pub was_promotion: bool,
}
