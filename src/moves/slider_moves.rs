//! Ray walking for bishops, rooks and queens on the mailbox board.

use crate::game_state::chess_types::{offset_square, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Squares outward from (but excluding) `origin` in one direction, up to the
/// board edge. Callers stop at the first occupied square.
#[inline]
pub fn ray(origin: Square, direction: (i8, i8)) -> Ray {
    Ray {
        current: origin,
        direction,
    }
}

pub struct Ray {
    current: Square,
    direction: (i8, i8),
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let next = offset_square(self.current, self.direction.0, self.direction.1)?;
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::ray;

    #[test]
    fn ray_stops_at_board_edge() {
        // a1 towards h8.
        let diagonal: Vec<u8> = ray(0, (1, 1)).collect();
        assert_eq!(diagonal, vec![9, 18, 27, 36, 45, 54, 63]);

        // h4 eastward leaves the board immediately.
        assert_eq!(ray(31, (1, 0)).count(), 0);
    }
}
