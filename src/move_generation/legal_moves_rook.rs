//! Rook move generation.
//!
//! Emits rook slides from one square, including captures. Castling rights
//! tied to the rook are handled by the executor, not here.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::slider_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(position: &Position, from: Square, out: &mut Vec<Move>) {
    push_slider_moves(position, from, PieceKind::Rook, &ROOK_DIRECTIONS, out);
}
