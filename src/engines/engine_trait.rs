//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be driven through a single trait interface.

use crate::chess_errors::ChessResult;
use crate::game_state::position::Position;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Overrides the engine's own default depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal moves.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Clears per-game state before a fresh game.
    fn new_game(&mut self) {}

    /// Unknown option names are ignored.
    fn set_option(&mut self, _name: &str, _value: &str) -> ChessResult<()> {
        Ok(())
    }

    fn choose_move(
        &mut self,
        position: &Position,
        params: &GoParams,
    ) -> ChessResult<EngineOutput>;
}
