//! Move-path enumeration for validating the generator against published
//! node counts.

use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_executor::execute_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

/// Leaf statistics; every field except `nodes` counts the move that reached
/// the leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

pub fn perft<G: MoveGenerator>(generator: &G, position: &Position, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }

    for mv in generator.generate_legal_moves(position) {
        perft_recurse(generator, position, &mv, depth, &mut total);
    }
    total
}

/// Node count under each root move, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .generate_legal_moves(position)
        .into_iter()
        .map(|mv| {
            let mut counts = PerftCounts::default();
            perft_recurse(generator, position, &mv, depth, &mut counts);
            (mv, counts.nodes)
        })
        .collect()
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    parent: &Position,
    mv: &Move,
    remaining: u8,
    counts: &mut PerftCounts,
) {
    let mut child = *parent;

    if remaining == 1 {
        let result = execute_move(&mut child, mv);
        counts.nodes += 1;
        counts.captures += usize::from(result.was_capture);
        counts.en_passant += usize::from(mv.is_en_passant());
        counts.castles += usize::from(result.was_castle);
        counts.promotions += usize::from(result.was_promotion);
        counts.checks += usize::from(result.was_check);
        counts.checkmates += usize::from(result.was_checkmate);
        return;
    }

    apply_move(&mut child, mv);
    for next in generator.generate_legal_moves(&child) {
        perft_recurse(generator, &child, &next, remaining - 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, PerftCounts};
    use crate::game_state::position::Position;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    fn counts(fen: &str, depth: u8) -> PerftCounts {
        let position = Position::from_fen(fen).expect("FEN should parse");
        perft(&LegalMoveGenerator, &position, depth)
    }

    #[test]
    fn depth_zero_is_one_node() {
        assert_eq!(perft(&LegalMoveGenerator, &Position::new_game(), 0).nodes, 1);
    }

    #[test]
    fn starting_position() {
        let position = Position::new_game();
        assert_eq!(perft(&LegalMoveGenerator, &position, 1).nodes, 20);
        assert_eq!(perft(&LegalMoveGenerator, &position, 2).nodes, 400);

        let d3 = perft(&LegalMoveGenerator, &position, 3);
        assert_eq!(d3.nodes, 8902);
        assert_eq!(d3.captures, 34);
        assert_eq!(d3.checks, 12);
        assert_eq!(d3.checkmates, 0);
    }

    #[test]
    fn kiwipete() {
        let d1 = counts(KIWIPETE, 1);
        assert_eq!(d1.nodes, 48);
        assert_eq!(d1.captures, 8);
        assert_eq!(d1.castles, 2);

        let d2 = counts(KIWIPETE, 2);
        assert_eq!(
            d2,
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn position_3() {
        let d1 = counts(POSITION_3, 1);
        assert_eq!(d1.nodes, 14);
        assert_eq!(d1.captures, 1);
        assert_eq!(d1.checks, 2);

        let d2 = counts(POSITION_3, 2);
        assert_eq!(d2.nodes, 191);
        assert_eq!(d2.captures, 14);
        assert_eq!(d2.checks, 10);

        let d3 = counts(POSITION_3, 3);
        assert_eq!(d3.nodes, 2812);
        assert_eq!(d3.captures, 209);
        assert_eq!(d3.en_passant, 2);
        assert_eq!(d3.checks, 267);
    }

    #[test]
    fn divide_sums_to_perft() {
        let position = Position::from_fen(KIWIPETE).expect("FEN should parse");
        let divided = perft_divide(&LegalMoveGenerator, &position, 2);
        assert_eq!(divided.len(), 48);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 2039);
    }
}
