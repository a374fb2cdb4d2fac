use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(position: &Position, from: Square, out: &mut Vec<Move>) {
    push_step_moves(position, from, PieceKind::Knight, knight_targets(from), out);
}
