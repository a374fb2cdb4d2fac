use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{generate_legal_moves, is_in_check};
use crate::moves::move_descriptions::{Move, MoveResult};

/// Applies `mv` and derives the caller-facing outcome flags.
///
/// Checkmate is only probed when the move gives check, since that needs a
/// full legal move generation for the opponent.
pub fn execute_move(position: &mut Position, mv: &Move) -> MoveResult {
    let captured = apply_move(position, mv);

    let was_check = is_in_check(position);
    let was_checkmate = was_check && generate_legal_moves(position).is_empty();

    MoveResult {
        mv: *mv,
        was_capture: captured.is_some(),
        was_check,
        was_checkmate,
        was_castle: mv.is_castling(),
        was_promotion: mv.promotion.is_some(),
    }
}
