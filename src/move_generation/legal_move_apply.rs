//! Move application.
//!
//! [`apply_move_to_board`] performs the physical effect of a move and is
//! shared by the legality filter and the executor, so both agree exactly on
//! where pieces end up. [`apply_move`] layers the state bookkeeping on top.

use crate::game_state::chess_rules::castling_for_king_target;
use crate::game_state::{chess_types::*, position::Position};
use crate::moves::move_descriptions::{Move, MoveType};

/// Relocates pieces for `mv` played by `mover` and returns the captured
/// piece, if any (the en passant victim included).
pub fn apply_move_to_board(board: &mut Board, mv: &Move, mover: Color) -> Option<Piece> {
    let mut captured = board.take(mv.to);

    let moving = board.take(mv.from).map(|piece| match mv.promotion {
        Some(promo) => Piece::new(promo, piece.color),
        None => piece,
    });
    board.set(mv.to, moving);

    match mv.move_type {
        MoveType::EnPassant => {
            let victim = match mover {
                Color::White => mv.to - 8,
                Color::Black => mv.to + 8,
            };
            captured = board.take(victim);
        }
        MoveType::Castling => {
            if let Some(squares) = castling_for_king_target(mv.to) {
                let rook = board.take(squares.rook_from);
                board.set(squares.rook_to, rook);
            }
        }
        MoveType::Normal => {}
    }

    captured
}

/// Applies `mv` to `position` in place and returns the captured piece.
///
/// The move is trusted to be legal for the side to move.
pub fn apply_move(position: &mut Position, mv: &Move) -> Option<Piece> {
    let mover = position.side_to_move;
    position.en_passant_square = None;

    let captured = apply_move_to_board(&mut position.board, mv, mover);

    if mv.piece == PieceKind::Pawn && mv.from.abs_diff(mv.to) == 16 {
        position.en_passant_square = Some((mv.from + mv.to) / 2);
    }

    update_castling_rights(&mut position.castling_rights, mv, mover, captured);

    if mv.piece == PieceKind::Pawn || captured.is_some() {
        position.halfmove_clock = 0;
    } else {
        position.halfmove_clock = position.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        position.fullmove_number = position.fullmove_number.saturating_add(1);
    }

    position.side_to_move = mover.opposite();
    captured
}

fn update_castling_rights(
    rights: &mut CastlingRights,
    mv: &Move,
    mover: Color,
    captured: Option<Piece>,
) {
    match mv.piece {
        PieceKind::King => rights.clear_color(mover),
        PieceKind::Rook => rights.clear_rook_square(mv.from),
        _ => {}
    }

    // Capturing a rook on its home square removes the opponent's right.
    if matches!(captured, Some(piece) if piece.kind == PieceKind::Rook) {
        rights.clear_rook_square(mv.to);
    }
}
