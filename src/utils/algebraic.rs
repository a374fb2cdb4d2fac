//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices reused by the FEN and long algebraic codecs.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::MalformedInput(format!(
            "invalid algebraic square: {square}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::MalformedInput(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::MalformedInput(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    let file_index = file - b'a';
    let rank_index = rank - b'1';
    Ok(rank_index * 8 + file_index)
}

/// Square index to algebraic notation. Callers pass indices below 64.
#[inline]
pub fn square_name(square: Square) -> String {
    debug_assert!(square < 64, "square index out of bounds: {square}");
    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_name};
    use crate::chess_errors::ChessErrors;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 28);
        assert_eq!(square_name(0), "a1");
        assert_eq!(square_name(63), "h8");
    }

    #[test]
    fn out_of_range_letters_are_malformed() {
        assert!(matches!(
            algebraic_to_square("i1"),
            Err(ChessErrors::MalformedInput(_))
        ));
        assert!(matches!(
            algebraic_to_square("a9"),
            Err(ChessErrors::MalformedInput(_))
        ));
        assert!(matches!(
            algebraic_to_square("E2"),
            Err(ChessErrors::MalformedInput(_))
        ));
    }
}
