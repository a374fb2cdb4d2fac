//! Core value types shared by every subsystem.
//!
//! Colors, piece kinds, pieces, the 64-square board, and castling rights.
//! Squares are plain `u8` indices where `0 == a1`, `7 == h1`, and `63 == h8`.

use std::fmt;

/// Board square index (`0..=63`).
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind. An empty square is `None` on the board rather than a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Promotion choices in generation order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

impl PieceKind {
    /// Lowercase letter used by FEN and long algebraic notation.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Case-insensitive inverse of [`PieceKind::to_char`].
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn to_fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.to_char().to_ascii_uppercase(),
            Color::Black => self.kind.to_char(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_char(ch).map(|kind| Piece::new(kind, color))
    }
}

/// Mailbox board: one optional piece per square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square as usize] = piece;
    }

    /// Removes and returns whatever stands on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square as usize].is_none()
    }

    #[inline]
    pub fn has_piece(&self, square: Square, kind: PieceKind, color: Color) -> bool {
        self.piece_at(square) == Some(Piece::new(kind, color))
    }

    /// Occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(sq, piece)| piece.map(|p| (sq as Square, p)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn count_color(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }
}

/// Castling permissions. Rights only ever go from `true` to `false` in play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    #[inline]
    pub const fn king_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    #[inline]
    pub const fn queen_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    pub fn clear_color(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_king_side = false;
                self.white_queen_side = false;
            }
            Color::Black => {
                self.black_king_side = false;
                self.black_queen_side = false;
            }
        }
    }

    /// Clears the right tied to a rook home square, if `square` is one.
    pub fn clear_rook_square(&mut self, square: Square) {
        match square {
            0 => self.white_queen_side = false,
            7 => self.white_king_side = false,
            56 => self.black_queen_side = false,
            63 => self.black_king_side = false,
            _ => {}
        }
    }

    /// True when every right held by `self` is also held by `earlier`.
    pub fn is_subset_of(&self, earlier: &CastlingRights) -> bool {
        (!self.white_king_side || earlier.white_king_side)
            && (!self.white_queen_side || earlier.white_queen_side)
            && (!self.black_king_side || earlier.black_king_side)
            && (!self.black_queen_side || earlier.black_queen_side)
    }
}

#[inline]
pub const fn square_rank(square: Square) -> i8 {
    (square / 8) as i8
}

#[inline]
pub const fn square_file(square: Square) -> i8 {
    (square % 8) as i8
}

/// Square at (`file`, `rank`) if both lie on the board.
#[inline]
pub const fn square_at(file: i8, rank: i8) -> Option<Square> {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        None
    } else {
        Some((rank * 8 + file) as Square)
    }
}

/// Square reached from `square` by (`d_file`, `d_rank`), if still on the board.
#[inline]
pub const fn offset_square(square: Square, d_file: i8, d_rank: i8) -> Option<Square> {
    square_at(square_file(square) + d_file, square_rank(square) + d_rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_square_rejects_edge_wraps() {
        // h1 one file right would wrap to a2 on a naive index add.
        assert_eq!(offset_square(7, 1, 0), None);
        assert_eq!(offset_square(0, -1, 1), None);
        assert_eq!(offset_square(27, 1, 2), Some(44));
    }

    #[test]
    fn castling_subset_tracks_monotonic_loss() {
        let mut rights = CastlingRights::ALL;
        rights.clear_rook_square(7);
        assert!(rights.is_subset_of(&CastlingRights::ALL));
        assert!(!CastlingRights::ALL.is_subset_of(&rights));
        assert!(!rights.white_king_side);
        assert!(rights.white_queen_side);
    }

    #[test]
    fn fen_chars_round_trip_through_piece() {
        let piece = Piece::from_fen_char('N').expect("N is a knight");
        assert_eq!(piece, Piece::new(PieceKind::Knight, Color::White));
        assert_eq!(piece.to_fen_char(), 'N');
        assert_eq!(Piece::from_fen_char('x'), None);
    }
}
