//! Compact 64-bit square sets used by the precomputed step tables.

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1u64 << square) != 0
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

/// Yields members in ascending square order.
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let square = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(square)
    }
}

/// Per-square table of every on-board square reached by one of `offsets`.
pub const fn squares_from_offsets(offsets: &[(i8, i8)]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut mask = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let (d_file, d_rank) = offsets[i];
            mask |= set_if_valid(file + d_file, rank + d_rank);
            i += 1;
        }

        table[sq] = SquareSet(mask);
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i8, rank: i8) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}

#[cfg(test)]
mod tests {
    use super::SquareSet;

    #[test]
    fn iter_walks_set_bits_in_order() {
        let set = SquareSet((1 << 3) | (1 << 40) | 1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3, 40]);
        assert!(set.contains(40));
        assert!(!set.contains(41));
    }
}
