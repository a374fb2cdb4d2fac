use crate::game_state::chess_rules::{king_side_castling, queen_side_castling, CastlingSquares};
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{Move, MoveType};

pub fn generate_king_moves(position: &Position, from: Square, out: &mut Vec<Move>) {
    push_step_moves(position, from, PieceKind::King, king_targets(from), out);
    generate_castling_moves(position, from, out);
}

/// Emits only fully valid castling moves; an unsafe castle never reaches the
/// legality filter.
fn generate_castling_moves(position: &Position, king_from: Square, out: &mut Vec<Move>) {
    let side = position.side_to_move();
    let rights = position.castling_rights();

    let options = [
        (rights.king_side(side), king_side_castling(side)),
        (rights.queen_side(side), queen_side_castling(side)),
    ];
    if !options.iter().any(|(held, _)| *held) {
        return;
    }

    let enemy = side.opposite();
    let board = position.board();

    // Cannot castle out of check.
    if is_square_attacked(board, king_from, enemy) {
        return;
    }

    for (held, squares) in options {
        if held && can_castle(board, side, king_from, &squares) {
            out.push(
                Move::new(king_from, squares.king_to, PieceKind::King).with_type(MoveType::Castling),
            );
        }
    }
}

fn can_castle(board: &Board, side: Color, king_from: Square, squares: &CastlingSquares) -> bool {
    king_from == squares.king_from
        && board.has_piece(squares.rook_from, PieceKind::Rook, side)
        && squares.between.iter().all(|&sq| board.is_empty(sq))
        && squares
            .king_path
            .iter()
            .all(|&sq| !is_square_attacked(board, sq, side.opposite()))
}
