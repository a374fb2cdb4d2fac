//! Position model.
//!
//! `Position` is the unit the generator reads, the executor mutates, and the
//! search copies. It is a plain `Copy` value with no shared state.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    // Informational FEN counters; legality and search ignore them.
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Position {
    /// Canonical starting position.
    pub fn new_game() -> Self {
        match parse_fen(STARTING_POSITION_FEN) {
            Ok(position) => position,
            Err(err) => unreachable!("starting FEN must parse: {err}"),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.board.king_square(color)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind};

    #[test]
    fn new_game_has_standard_layout() {
        let position = Position::new_game();

        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.castling_rights(), CastlingRights::ALL);
        assert_eq!(position.en_passant_square(), None);
        assert_eq!(position.board().piece_count(), 32);
        assert_eq!(
            position.piece_at(4),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            position.piece_at(59),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(position.king_square(Color::Black), Some(60));
    }

    #[test]
    fn new_game_is_side_effect_free() {
        assert_eq!(Position::new_game(), Position::new_game());
    }
}
