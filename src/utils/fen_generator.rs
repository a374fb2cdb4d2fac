use crate::game_state::{chess_types::*, position::Position};
use crate::utils::algebraic::square_name;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position.board());
    let side_to_move = match position.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position.castling_rights());
    let en_passant = position
        .en_passant_square()
        .map(square_name)
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        position.halfmove_clock(),
        position.fullmove_number()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.piece_at(rank * 8 + file) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights.white_king_side {
        out.push('K');
    }
    if rights.white_queen_side {
        out.push('Q');
    }
    if rights.black_king_side {
        out.push('k');
    }
    if rights.black_queen_side {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
