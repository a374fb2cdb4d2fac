//! King step targets.

use crate::game_state::chess_types::Square;
use crate::moves::square_set::{squares_from_offsets, SquareSet};

/// (file, rank) deltas of a king step.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KING_TARGETS: [SquareSet; 64] = squares_from_offsets(&KING_OFFSETS);

#[inline]
pub const fn king_targets(square: Square) -> SquareSet {
    KING_TARGETS[square as usize]
}

#[cfg(test)]
mod tests {
    use super::king_targets;

    #[test]
    fn king_on_a1_has_three_targets() {
        assert_eq!(king_targets(0).len(), 3);
    }

    #[test]
    fn king_in_center_has_eight_targets() {
        assert_eq!(king_targets(36).len(), 8);
    }
}
