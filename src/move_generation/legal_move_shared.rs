use crate::game_state::{chess_types::*, position::Position};
use crate::moves::move_descriptions::Move;
use crate::moves::slider_moves::ray;
use crate::moves::square_set::SquareSet;

/// True when `square` can be entered by a piece of `side`: empty or enemy.
#[inline]
pub fn is_open_for(position: &Position, square: Square, side: Color) -> bool {
    !matches!(position.piece_at(square), Some(piece) if piece.color == side)
}

/// Pushes a move to every target not occupied by the mover's own pieces.
pub fn push_step_moves(
    position: &Position,
    from: Square,
    piece: PieceKind,
    targets: SquareSet,
    out: &mut Vec<Move>,
) {
    let side = position.side_to_move();
    for to in targets.iter() {
        if is_open_for(position, to, side) {
            out.push(Move::new(from, to, piece));
        }
    }
}

/// Walks each direction until the edge, an own piece (excluded), or an
/// enemy piece (included as a capture).
pub fn push_slider_moves(
    position: &Position,
    from: Square,
    piece: PieceKind,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let side = position.side_to_move();
    for &direction in directions {
        for to in ray(from, direction) {
            match position.piece_at(to) {
                None => out.push(Move::new(from, to, piece)),
                Some(occupant) => {
                    if occupant.color != side {
                        out.push(Move::new(from, to, piece));
                    }
                    break;
                }
            }
        }
    }
}
