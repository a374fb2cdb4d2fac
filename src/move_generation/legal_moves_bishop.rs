use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::slider_moves::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(position: &Position, from: Square, out: &mut Vec<Move>) {
    push_slider_moves(position, from, PieceKind::Bishop, &BISHOP_DIRECTIONS, out);
}
