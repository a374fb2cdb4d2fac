//! Long algebraic move codec.
//!
//! Input is always resolved against a list of legal moves so the caller gets
//! back a fully described [`Move`] (piece, promotion, special type) rather
//! than a pair of squares.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{
    BLACK_KING_SIDE, BLACK_QUEEN_SIDE, WHITE_KING_SIDE, WHITE_QUEEN_SIDE,
};
use crate::game_state::chess_types::{PieceKind, Square, PROMOTION_KINDS};
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_name};

pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}

/// Resolve `input` (e.g. `e2e4`, `e7e8q`) to one of `legal_moves`.
///
/// King-onto-own-rook input such as `e1h1` is accepted as castling.
pub fn long_algebraic_to_move(input: &str, legal_moves: &[Move]) -> ChessResult<Move> {
    let text = input.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::MalformedInput(format!(
            "expected 4 or 5 characters of long algebraic notation, got {text:?}"
        )));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let mut to = algebraic_to_square(&text[2..4])?;

    let mut candidates: Vec<&Move> = matching(legal_moves, from, to);
    if candidates.is_empty() {
        if let Some(king_to) = castling_alias(from, to) {
            let castles: Vec<&Move> = matching(legal_moves, from, king_to)
                .into_iter()
                .filter(|mv| mv.is_castling())
                .collect();
            if !castles.is_empty() {
                to = king_to;
                candidates = castles;
            }
        }
    }

    match candidates.as_slice() {
        [] => Err(ChessErrors::IllegalMove(format!("{text} is not legal here"))),
        [only] => Ok(**only),
        _ => {
            let promotion = text
                .chars()
                .nth(4)
                .and_then(PieceKind::from_char)
                .filter(|kind| PROMOTION_KINDS.contains(kind))
                .ok_or_else(|| {
                    ChessErrors::AmbiguousPromotion(format!(
                        "{text} needs a promotion piece (q, r, b or n)"
                    ))
                })?;

            candidates
                .into_iter()
                .find(|mv| mv.promotion == Some(promotion))
                .copied()
                .ok_or_else(|| {
                    ChessErrors::IllegalMove(format!(
                        "no promotion to {promotion:?} from {} to {}",
                        &text[0..2],
                        square_name(to)
                    ))
                })
        }
    }
}

fn matching(legal_moves: &[Move], from: Square, to: Square) -> Vec<&Move> {
    legal_moves
        .iter()
        .filter(|mv| mv.from == from && mv.to == to)
        .collect()
}

fn castling_alias(from: Square, to: Square) -> Option<Square> {
    [
        WHITE_KING_SIDE,
        WHITE_QUEEN_SIDE,
        BLACK_KING_SIDE,
        BLACK_QUEEN_SIDE,
    ]
    .into_iter()
    .find(|c| c.king_from == from && c.rook_from == to)
    .map(|c| c.king_to)
}
