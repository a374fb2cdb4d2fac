//! FEN-to-Position parser.
//!
//! Piece placement is required and validated. The trailing fields are
//! lenient: side to move is White only for exactly `w`, and missing
//! castling, en passant, or clock fields fall back to none / none / 0 / 1.
//! A layout is rejected unless each side has one king, the side that just
//! moved is out of check, and any en passant target sits behind an enemy
//! pawn that could have double-pushed there.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::algebraic::{algebraic_to_square, square_name};

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| invalid("missing board layout"))?;

    let mut position = Position {
        board: parse_board(board_part)?,
        ..Position::default()
    };

    position.side_to_move = match parts.next() {
        Some("w") => Color::White,
        _ => Color::Black,
    };

    if let Some(castling_part) = parts.next() {
        position.castling_rights = parse_castling_rights(castling_part)?;
    }

    if let Some(en_passant_part) = parts.next() {
        position.en_passant_square = parse_en_passant_square(en_passant_part)?;
    }

    if let Some(halfmove_part) = parts.next() {
        position.halfmove_clock = halfmove_part
            .parse::<u16>()
            .map_err(|_| invalid(&format!("halfmove clock '{halfmove_part}'")))?;
    }

    if let Some(fullmove_part) = parts.next() {
        position.fullmove_number = fullmove_part
            .parse::<u16>()
            .map_err(|_| invalid(&format!("fullmove number '{fullmove_part}'")))?;
    }

    for color in [Color::White, Color::Black] {
        let kings = position
            .board
            .pieces()
            .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .count();
        if kings != 1 {
            return Err(invalid(&format!("expected one {color} king, found {kings}")));
        }
    }

    if let Some(target) = position.en_passant_square {
        validate_en_passant_target(&position.board, position.side_to_move, target)?;
    }

    let waiting = position.side_to_move.opposite();
    if is_king_in_check(&position.board, waiting) {
        return Err(invalid(&format!(
            "{waiting} king is in check with {} to move",
            position.side_to_move
        )));
    }

    Ok(position)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            board.set((board_rank * 8 + file) as Square, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => return Err(invalid(&format!("castling rights character '{ch}'"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(&format!("en passant square '{en_passant_part}'")))
}

/// The target must be the square a double push just skipped: empty, on the
/// pusher's third rank, with the pushed pawn directly beyond it.
fn validate_en_passant_target(
    board: &Board,
    side_to_move: Color,
    target: Square,
) -> ChessResult<()> {
    let pusher = side_to_move.opposite();
    let (expected_rank, pawn_square) = match side_to_move {
        Color::White => (5, target.wrapping_sub(8)),
        Color::Black => (2, target.wrapping_add(8)),
    };

    if target / 8 != expected_rank
        || !board.is_empty(target)
        || !board.has_piece(pawn_square, PieceKind::Pawn, pusher)
    {
        return Err(invalid(&format!(
            "en passant square {} is not behind a {pusher} pawn",
            square_name(target)
        )));
    }
    Ok(())
}

fn invalid(reason: &str) -> ChessErrors {
    ChessErrors::InvalidFen(reason.to_owned())
}
