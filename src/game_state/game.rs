//! Mutable game record.
//!
//! `Game` is the only place where a position changes over time. Every
//! accepted move pushes a [`StateSnapshot`] first, so `undo_move` is an exact
//! restore. History, snapshots, and results always have the same length.

use tracing::{debug, warn};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::position::Position;
use crate::game_state::undo_state::StateSnapshot;
use crate::move_generation::legal_move_generator::{game_status, generate_legal_moves, is_in_check};
use crate::move_generation::move_executor::execute_move;
use crate::move_generation::move_generator::GameStatus;
use crate::moves::move_descriptions::{Move, MoveResult};
use crate::search::negamax::best_move;
use crate::utils::long_algebraic::long_algebraic_to_move;

#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    history: Vec<Move>,
    snapshots: Vec<StateSnapshot>,
    results: Vec<MoveResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::new_game())
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            history: Vec::new(),
            snapshots: Vec::new(),
            results: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn move_results(&self) -> &[MoveResult] {
        &self.results
    }

    #[inline]
    pub fn last_move_result(&self) -> Option<&MoveResult> {
        self.results.last()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(&self.position)
    }

    pub fn in_check(&self) -> bool {
        is_in_check(&self.position)
    }

    pub fn status(&self) -> GameStatus {
        game_status(&self.position)
    }

    /// Applies `mv` if it is in the current legal set. A rejected move leaves
    /// the game untouched.
    pub fn apply_move(&mut self, mv: Move) -> ChessResult<MoveResult> {
        if !self.legal_moves().contains(&mv) {
            warn!(mv = %mv, fen = %self.position.to_fen(), "rejected illegal move");
            return Err(ChessErrors::IllegalMove(format!(
                "{mv} is not legal for {}",
                self.position.side_to_move()
            )));
        }

        self.snapshots.push(StateSnapshot {
            position: self.position,
            last_move: self.history.last().copied(),
        });
        let result = execute_move(&mut self.position, &mv);
        self.history.push(mv);
        self.results.push(result);

        debug!(
            mv = %mv,
            capture = result.was_capture,
            check = result.was_check,
            mate = result.was_checkmate,
            ply = self.history.len(),
            "applied move"
        );
        Ok(result)
    }

    /// Decodes long algebraic `input` against the legal moves and applies it.
    pub fn play_move(&mut self, input: &str) -> ChessResult<MoveResult> {
        let mv = long_algebraic_to_move(input, &self.legal_moves()).inspect_err(|err| {
            warn!(input, %err, "rejected move input");
        })?;
        self.apply_move(mv)
    }

    /// Restores the position before the last move. `None` when there is
    /// nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let snapshot = self.snapshots.pop()?;
        self.position = snapshot.position;
        self.results.pop();
        let undone = self.history.pop();
        debug_assert_eq!(self.history.last().copied(), snapshot.last_move);

        if let Some(mv) = undone {
            debug!(mv = %mv, ply = self.history.len(), "undid move");
        }
        undone
    }

    /// Fixed-depth search from the current position.
    pub fn best_move(&self, depth: u8) -> ChessResult<Move> {
        best_move(&self.position, depth)
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::Game;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::position::Position;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::move_generation::move_generator::GameStatus;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn e2e4_from_the_start() {
        let mut game = Game::new();
        let result = game.play_move("e2e4").expect("e2e4 should be legal");

        assert!(!result.was_capture && !result.was_check);
        let position = game.position();
        assert_eq!(position.piece_at(12), None);
        assert_eq!(
            position.piece_at(28),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(position.en_passant_square(), Some(20));
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(game.history(), &[Move::new(12, 28, PieceKind::Pawn)]);
        assert_eq!(game.last_move_result(), Some(&result));
    }

    #[test]
    fn rejected_input_does_not_mutate() {
        let mut game = Game::new();
        game.play_move("e2e4").expect("e2e4 should be legal");
        let before = *game.position();

        assert!(matches!(
            game.play_move("e7e4"),
            Err(ChessErrors::IllegalMove(_))
        ));
        assert!(matches!(
            game.play_move("bogus"),
            Err(ChessErrors::MalformedInput(_))
        ));
        assert!(matches!(
            game.apply_move(Move::new(1, 18, PieceKind::Knight)),
            Err(ChessErrors::IllegalMove(_))
        ));

        assert_eq!(*game.position(), before);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.move_results().len(), 1);
    }

    #[test]
    fn undo_restores_the_exact_prior_position() {
        let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 7")
            .expect("FEN should parse");
        let start = *game.position();

        game.play_move("e1g1").expect("castling should be legal");
        let after_castle = *game.position();
        game.play_move("a8a1").expect("rook capture should be legal");

        assert_eq!(game.undo_move(), Some(Move::new(56, 0, PieceKind::Rook)));
        assert_eq!(*game.position(), after_castle);
        assert!(game.undo_move().is_some_and(|mv| mv.is_castling()));
        assert_eq!(*game.position(), start);

        assert_eq!(game.undo_move(), None);
        assert_eq!(*game.position(), start);
        assert!(game.history().is_empty() && game.move_results().is_empty());
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = Game::new();
        for mv in ["f2f3", "e7e5", "g2g4"] {
            game.play_move(mv).expect("opening move should be legal");
        }
        let result = game.play_move("d8h4").expect("Qh4 should be legal");

        assert!(result.was_checkmate);
        assert!(game.in_check());
        assert!(game.legal_moves().is_empty());
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
    }

    #[test]
    fn seeded_self_play_preserves_invariants() {
        for seed in 0..8u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::new();

            for _ in 0..120 {
                let moves = game.legal_moves();
                let Some(&mv) = moves.choose(&mut rng) else {
                    assert!(game.status().is_over());
                    break;
                };

                let before = *game.position();
                let result = game.apply_move(mv).expect("generated move should apply");
                let after = *game.position();

                assert_eq!(after.side_to_move(), before.side_to_move().opposite());
                assert!(!is_king_in_check(after.board(), before.side_to_move()));

                let removed = before.board().piece_count() - after.board().piece_count();
                assert_eq!(removed, usize::from(result.was_capture), "{mv} in seed {seed}");
                assert_eq!(
                    before.board().count_color(before.side_to_move()),
                    after.board().count_color(before.side_to_move())
                );

                assert!(after
                    .castling_rights()
                    .is_subset_of(&before.castling_rights()));

                let double_push = mv.piece == PieceKind::Pawn && mv.from.abs_diff(mv.to) == 16;
                assert_eq!(after.en_passant_square().is_some(), double_push);

                assert_eq!(game.history().len(), game.move_results().len());
            }

            while game.undo_move().is_some() {}
            assert_eq!(*game.position(), Position::new_game());
        }
    }
}
