use crate::game_state::position::Position;
use crate::moves::move_descriptions::Move;

/// Source of legal moves for search and perft.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, position: &Position) -> Vec<Move>;
}

/// Terminal classification of a position with no legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is mated; `winner` is the other side.
    Checkmate {
        winner: crate::game_state::chess_types::Color,
    },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}
