//! Full legal move generation pipeline.
//!
//! Dispatches pseudo-legal generation per occupied square, then keeps only
//! the moves that do not leave the mover's king attacked when simulated on a
//! scratch board. Simulation is the single source of truth for legality;
//! there is no pin detection.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GameStatus, MoveGenerator};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> Vec<Move> {
        generate_legal_moves(position)
    }
}

/// Moves obeying piece movement rules, ignoring own-king safety.
/// Castling candidates are already fully validated.
pub fn generate_pseudo_legal_moves(position: &Position) -> Vec<Move> {
    let side = position.side_to_move();
    let mut pseudo = Vec::<Move>::with_capacity(64);

    for (from, piece) in position.board().pieces() {
        if piece.color != side {
            continue;
        }

        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(position, from, &mut pseudo),
            PieceKind::Knight => generate_knight_moves(position, from, &mut pseudo),
            PieceKind::Bishop => generate_bishop_moves(position, from, &mut pseudo),
            PieceKind::Rook => generate_rook_moves(position, from, &mut pseudo),
            PieceKind::Queen => generate_queen_moves(position, from, &mut pseudo),
            PieceKind::King => generate_king_moves(position, from, &mut pseudo),
        }
    }

    pseudo
}

pub fn generate_legal_moves(position: &Position) -> Vec<Move> {
    let mut moves = generate_pseudo_legal_moves(position);
    moves.retain(|mv| !leaves_own_king_attacked(position, mv));
    moves
}

/// Simulates `mv` on a copy of the board and tests the mover's king.
pub fn leaves_own_king_attacked(position: &Position, mv: &Move) -> bool {
    let mover = position.side_to_move();
    let mut scratch = *position.board();
    apply_move_to_board(&mut scratch, mv, mover);
    is_king_in_check(&scratch, mover)
}

#[inline]
pub fn is_in_check(position: &Position) -> bool {
    is_king_in_check(position.board(), position.side_to_move())
}

pub fn game_status(position: &Position) -> GameStatus {
    if !generate_legal_moves(position).is_empty() {
        return GameStatus::Ongoing;
    }

    if is_in_check(position) {
        GameStatus::Checkmate {
            winner: position.side_to_move().opposite(),
        }
    } else {
        GameStatus::Stalemate
    }
}
