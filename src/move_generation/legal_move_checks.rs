//! Square attack and check detection.
//!
//! Works directly on a [`Board`] so the legality filter can probe scratch
//! copies without building a full position.

use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::slider_moves::{ray, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

/// Locates `color`'s king.
///
/// # Panics
/// Panics when the board has no king of that color. Every position built by
/// this crate carries both kings, so a missing king means the caller
/// constructed a corrupt board.
#[inline]
pub fn king_square(board: &Board, color: Color) -> Square {
    match board.king_square(color) {
        Some(square) => square,
        None => panic!("board has no {color} king"),
    }
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    is_square_attacked(board, king_square(board, color), color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    // A pawn attacks `square` exactly from the squares a defending pawn on
    // `square` would itself attack.
    let pawn_sources = pawn_attacks(attacker_color.opposite(), square);
    if pawn_sources
        .iter()
        .any(|from| board.has_piece(from, PieceKind::Pawn, attacker_color))
    {
        return true;
    }

    if knight_targets(square)
        .iter()
        .any(|from| board.has_piece(from, PieceKind::Knight, attacker_color))
    {
        return true;
    }

    if first_blocker_is(board, square, &ROOK_DIRECTIONS, attacker_color, PieceKind::Rook) {
        return true;
    }

    if first_blocker_is(board, square, &BISHOP_DIRECTIONS, attacker_color, PieceKind::Bishop) {
        return true;
    }

    king_targets(square)
        .iter()
        .any(|from| board.has_piece(from, PieceKind::King, attacker_color))
}

/// True if the first occupied square along any of `directions` holds an
/// `attacker_color` `slider` or queen.
fn first_blocker_is(
    board: &Board,
    square: Square,
    directions: &[(i8, i8)],
    attacker_color: Color,
    slider: PieceKind,
) -> bool {
    directions.iter().any(|&direction| {
        ray(square, direction)
            .find_map(|sq| board.piece_at(sq))
            .is_some_and(|piece| {
                piece.color == attacker_color
                    && (piece.kind == slider || piece.kind == PieceKind::Queen)
            })
    })
}
