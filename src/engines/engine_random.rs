//! Random-move engine.
//!
//! Selects uniformly from legal moves; used as a baseline opponent and for
//! self-play diagnostics.

use rand::prelude::IndexedRandom;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Default)]
pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Plum Rules Random"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(position);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine ignoring_depth {depth}"));
        }

        out.best_move = legal_moves.choose(&mut rand::rng()).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::position::Position;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    #[test]
    fn picks_a_legal_move() {
        let position = Position::new_game();
        let legal = generate_legal_moves(&position);
        let mut engine = RandomEngine::new();

        for _ in 0..16 {
            let out = engine
                .choose_move(&position, &GoParams::default())
                .expect("random engine should not fail");
            let chosen = out.best_move.expect("start position has moves");
            assert!(legal.contains(&chosen));
        }
    }

    #[test]
    fn no_move_when_mated() {
        let position =
            Position::from_fen("4k3/8/8/8/8/8/5PPP/r5K1 w - - 0 1").expect("FEN should parse");
        let out = RandomEngine::new()
            .choose_move(&position, &GoParams { depth: Some(2) })
            .expect("random engine should not fail");
        assert_eq!(out.best_move, None);
        assert_eq!(out.info_lines.len(), 2);
    }
}
