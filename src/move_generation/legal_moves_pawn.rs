use crate::game_state::chess_rules::{pawn_direction, pawn_home_rank, promotion_rank};
use crate::game_state::{chess_types::*, position::Position};
use crate::moves::move_descriptions::{Move, MoveType};
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(position: &Position, from: Square, out: &mut Vec<Move>) {
    let side = position.side_to_move();
    let direction = pawn_direction(side);

    // Pushes.
    if let Some(one_step) = offset_square(from, 0, direction) {
        if position.board().is_empty(one_step) {
            push_with_promotions(side, Move::new(from, one_step, PieceKind::Pawn), out);

            if square_rank(from) == pawn_home_rank(side) {
                if let Some(two_step) = offset_square(from, 0, 2 * direction) {
                    if position.board().is_empty(two_step) {
                        out.push(Move::new(from, two_step, PieceKind::Pawn));
                    }
                }
            }
        }
    }

    // Captures and en passant.
    for to in pawn_attacks(side, from).iter() {
        match position.piece_at(to) {
            Some(target) if target.color != side => {
                push_with_promotions(side, Move::new(from, to, PieceKind::Pawn), out);
            }
            None if position.en_passant_square() == Some(to) => {
                out.push(Move::new(from, to, PieceKind::Pawn).with_type(MoveType::EnPassant));
            }
            _ => {}
        }
    }
}

/// Expands a move onto the far rank into one move per promotion kind.
fn push_with_promotions(side: Color, mv: Move, out: &mut Vec<Move>) {
    if square_rank(mv.to) == promotion_rank(side) {
        for promo in PROMOTION_KINDS {
            out.push(mv.with_promotion(promo));
        }
    } else {
        out.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::position::Position;
    use crate::moves::move_descriptions::MoveType;

    fn pawn_moves(fen: &str, from: u8) -> Vec<crate::moves::move_descriptions::Move> {
        let position = Position::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&position, from, &mut out);
        out
    }

    #[test]
    fn home_rank_pawn_has_single_and_double_push() {
        let moves = pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", 12);
        let targets: Vec<u8> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![20, 28]);
    }

    #[test]
    fn blocked_intermediate_square_prevents_double_push() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", 12);
        assert!(moves.is_empty());

        let moves = pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", 12);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, 20);
    }

    #[test]
    fn promotions_expand_for_pushes_and_captures() {
        // b7 pawn may push to b8 or capture on a8/c8.
        let moves = pawn_moves("r1n1k3/1P6/8/8/8/8/8/4K3 w - - 0 1", 49);
        assert_eq!(moves.len(), 12);
        let queens = moves
            .iter()
            .filter(|m| m.promotion == Some(PieceKind::Queen))
            .count();
        assert_eq!(queens, 3);
        assert_eq!(moves[0].promotion, Some(PieceKind::Queen));
        assert_eq!(moves[3].promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn black_pawns_move_down_the_board() {
        let moves = pawn_moves("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1", 51);
        let targets: Vec<u8> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![43, 35]);
    }

    #[test]
    fn en_passant_only_onto_the_target_square() {
        let moves = pawn_moves("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1", 35);
        let ep: Vec<_> = moves
            .iter()
            .filter(|m| m.move_type == MoveType::EnPassant)
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to, 44);

        let without_target = pawn_moves("4k3/8/8/3Pp3/8/8/8/4K3 w - - 0 1", 35);
        assert!(without_target
            .iter()
            .all(|m| m.move_type != MoveType::EnPassant));
    }
}
