use crate::game_state::chess_types::{Color, Square};
use crate::moves::square_set::{squares_from_offsets, SquareSet};

pub const WHITE_PAWN_ATTACKS: [SquareSet; 64] = squares_from_offsets(&[(-1, 1), (1, 1)]);
pub const BLACK_PAWN_ATTACKS: [SquareSet; 64] = squares_from_offsets(&[(-1, -1), (1, -1)]);

/// Squares a pawn of `color` standing on `square` attacks.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> SquareSet {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::Color;

    #[test]
    fn edge_pawns_attack_one_square() {
        // a2 white pawn only hits b3; h7 black pawn only hits g6.
        assert_eq!(pawn_attacks(Color::White, 8).iter().collect::<Vec<_>>(), vec![17]);
        assert_eq!(pawn_attacks(Color::Black, 55).iter().collect::<Vec<_>>(), vec![46]);
    }

    #[test]
    fn last_rank_pawns_attack_nothing() {
        assert!(pawn_attacks(Color::White, 60).is_empty());
        assert!(pawn_attacks(Color::Black, 3).is_empty());
    }
}
