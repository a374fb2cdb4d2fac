use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::MaterialPositionalScorer;
use crate::search::negamax::{search, SearchConfig};

pub const DEFAULT_DEPTH: u8 = 3;

/// Fixed-depth alpha-beta engine with shuffled root ordering.
pub struct MinimaxEngine {
    default_depth: u8,
    seed: Option<u64>,
    rng: StdRng,
    move_generator: LegalMoveGenerator,
    scorer: MaterialPositionalScorer,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self::with_seed(default_depth, None)
    }

    /// Deterministic engine for reproducible games. Every new game replays
    /// the same random stream.
    pub fn seeded(default_depth: u8, seed: u64) -> Self {
        Self::with_seed(default_depth, Some(seed))
    }

    fn with_seed(default_depth: u8, seed: Option<u64>) -> Self {
        Self {
            default_depth: default_depth.max(1),
            seed,
            rng: rng_for(seed),
            move_generator: LegalMoveGenerator,
            scorer: MaterialPositionalScorer,
        }
    }

    pub fn default_depth(&self) -> u8 {
        self.default_depth
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Plum Rules Minimax"
    }

    fn new_game(&mut self) {
        self.rng = rng_for(self.seed);
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if name.eq_ignore_ascii_case("Depth") {
            let parsed = value
                .trim()
                .parse::<u8>()
                .map_err(|_| ChessErrors::MalformedInput(format!("invalid Depth value '{value}'")))?;
            self.default_depth = parsed.max(1);
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Seed") {
            let parsed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ChessErrors::MalformedInput(format!("invalid Seed value '{value}'")))?;
            self.seed = Some(parsed);
            self.rng = rng_for(self.seed);
            return Ok(());
        }
        Ok(())
    }

    fn choose_move(
        &mut self,
        position: &Position,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.default_depth).max(1);
        let config = SearchConfig {
            depth,
            ..SearchConfig::default()
        };

        let mut out = EngineOutput::default();
        match search(
            position,
            &self.move_generator,
            &self.scorer,
            config,
            &mut self.rng,
        ) {
            Ok(result) => {
                out.best_move = Some(result.best_move);
                out.info_lines.push(format!(
                    "info depth {} score cp {} nodes {}",
                    depth, result.best_score, result.nodes
                ));
            }
            Err(ChessErrors::NoLegalMoves) => {
                out.info_lines
                    .push("info string minimax_engine no_legal_moves".to_owned());
            }
            Err(err) => return Err(err),
        }

        Ok(out)
    }
}
