use crate::game_state::position::Position;
use crate::moves::move_descriptions::Move;

/// Pre-mutation copy of the position pushed by `Game` before every move.
///
/// Restoring is a verbatim copy; no incremental unmake is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSnapshot {
    pub position: Position,
    /// Move that produced `position`, `None` at the start of the game.
    pub last_move: Option<Move>,
}
