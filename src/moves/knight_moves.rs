//! Knight jump targets.
//!
//! Targets are precomputed per square as bit masks so edge wrapping is
//! resolved once at compile time rather than on every lookup.

use crate::game_state::chess_types::Square;
use crate::moves::square_set::{squares_from_offsets, SquareSet};

/// (file, rank) deltas of a knight jump.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KNIGHT_TARGETS: [SquareSet; 64] = squares_from_offsets(&KNIGHT_OFFSETS);

#[inline]
pub const fn knight_targets(square: Square) -> SquareSet {
    KNIGHT_TARGETS[square as usize]
}
