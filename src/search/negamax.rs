//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! Every child is searched on its own copy of the position, so siblings never
//! share mutable state. Leaves are scored statically; positions without legal
//! moves above the horizon score as mate or stalemate.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{is_in_check, LegalMoveGenerator};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{
    BoardScorer, MaterialPositionalScorer, MATE_SCORE, SCORE_INFINITY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search; zero is treated as one.
    pub depth: u8,
    /// When false every node searches all of its children.
    pub pruning: bool,
    /// Shuffle root moves so equal scores do not always pick the same move.
    pub shuffle_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            pruning: true,
            shuffle_root: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub best_score: i32,
    pub nodes: u64,
}

/// Searches `position` with the default generator and scorer and a
/// thread-local random source for root ordering.
pub fn best_move(position: &Position, depth: u8) -> ChessResult<Move> {
    let config = SearchConfig {
        depth,
        ..SearchConfig::default()
    };
    let result = search(
        position,
        &LegalMoveGenerator,
        &MaterialPositionalScorer,
        config,
        &mut rand::rng(),
    )?;
    Ok(result.best_move)
}

pub fn search<G, S, R>(
    position: &Position,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    rng: &mut R,
) -> ChessResult<SearchResult>
where
    G: MoveGenerator,
    S: BoardScorer,
    R: Rng + ?Sized,
{
    let depth = config.depth.max(1);

    let mut moves = generator.generate_legal_moves(position);
    if config.shuffle_root {
        moves.shuffle(rng);
    }
    let Some(&fallback) = moves.first() else {
        return Err(ChessErrors::NoLegalMoves);
    };

    let mut ctx = SearchContext {
        generator,
        scorer,
        pruning: config.pruning,
        nodes: 0,
    };

    let mut alpha = -SCORE_INFINITY;
    let beta = SCORE_INFINITY;
    let mut best_move = fallback;
    let mut best_score = -SCORE_INFINITY;

    for mv in &moves {
        let mut child = *position;
        apply_move(&mut child, mv);
        let score = -ctx.negamax(&child, depth - 1, -beta, -alpha, 1);
        trace!(mv = %mv, score, "root move scored");

        if score > best_score {
            best_score = score;
            best_move = *mv;
        }
        if score > alpha {
            alpha = score;
        }
    }

    debug!(
        depth,
        best = %best_move,
        score = best_score,
        nodes = ctx.nodes,
        "search finished"
    );

    Ok(SearchResult {
        best_move,
        best_score,
        nodes: ctx.nodes,
    })
}

struct SearchContext<'a, G, S> {
    generator: &'a G,
    scorer: &'a S,
    pruning: bool,
    nodes: u64,
}

impl<G: MoveGenerator, S: BoardScorer> SearchContext<'_, G, S> {
    fn negamax(
        &mut self,
        position: &Position,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        ply: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.scorer.score(position);
        }

        let moves = self.generator.generate_legal_moves(position);
        if moves.is_empty() {
            return if is_in_check(position) {
                -MATE_SCORE + ply
            } else {
                0
            };
        }

        let mut best = -SCORE_INFINITY;
        for mv in &moves {
            let mut child = *position;
            apply_move(&mut child, mv);
            let score = -self.negamax(&child, depth - 1, -beta, -alpha, ply + 1);

            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if self.pruning && alpha >= beta {
                break;
            }
        }

        best
    }
}
