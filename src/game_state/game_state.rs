//! Game session state.
//!
//! `GameState` is the value a caller owns for one game. It holds the board,
//! the side to move, the promotion phase, the move history and the FEN fields
//! this engine does not interpret. Every rule query and every state change
//! for a game goes through it; there is no shared or global board.

use std::collections::BTreeSet;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN_TAIL;
use crate::game_state::chess_types::{Board, PieceKind, Side, Square};
use crate::game_state::game_config::GameConfig;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator;
use crate::move_generation::legal_move_shared::candidate_destinations;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// What the game is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// The side to move may move any of its pieces.
    AwaitingMove,
    /// A pawn of `side` stands on `square` and must be promoted first.
    AwaitingPromotion { square: Square, side: Side },
}

/// Successful result of [`GameState::try_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted,
    /// The move was applied and the pawn on the square awaits promotion.
    AcceptedPendingPromotion(Square),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Side,
    pub(crate) phase: GamePhase,
    // Castling, en passant and clock fields, kept verbatim.
    pub(crate) fen_tail: String,
    pub(crate) move_history: Vec<String>,
    pub(crate) record_history: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Empty board, White to move. Mostly useful for setting up positions
    /// square by square.
    pub fn new_empty() -> Self {
        Self::from_board(Board::new_empty(), Side::White)
    }

    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        Self {
            fen_tail: STARTING_POSITION_FEN_TAIL.to_owned(),
            ..Self::from_board(Board::standard(), Side::White)
        }
    }

    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            phase: GamePhase::AwaitingMove,
            fen_tail: String::new(),
            move_history: Vec::new(),
            record_history: true,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    pub fn with_config(config: &GameConfig) -> ChessResult<Self> {
        let mut game_state = parse_fen(&config.starting_fen)?;
        game_state.record_history = config.record_history;
        Ok(game_state)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn current_side(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the board for rendering or serialization.
    #[inline]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    #[inline]
    pub fn fen_tail(&self) -> &str {
        &self.fen_tail
    }

    /// Accepted moves in long algebraic form, oldest first.
    #[inline]
    pub fn move_history(&self) -> &[String] {
        &self.move_history
    }

    /// Geometry-only destinations, regardless of turn or king safety.
    pub fn candidate_destinations(&self, square: Square) -> BTreeSet<Square> {
        candidate_destinations(&self.board, square)
            .into_iter()
            .collect()
    }

    /// Squares the piece on `square` may legally move to right now.
    ///
    /// Empty when the square is empty, holds a piece of the side not on
    /// move, or a promotion is still pending.
    pub fn legal_destinations(&self, square: Square) -> ChessResult<BTreeSet<Square>> {
        if !self.is_selectable(square) {
            return Ok(BTreeSet::new());
        }
        legal_move_generator::legal_destinations(&self.board, square)
    }

    /// Whether [`GameState::try_move`] would accept `from -> to`.
    pub fn is_legal_move(&self, from: Square, to: Square) -> ChessResult<bool> {
        if !self.is_selectable(from) {
            return Ok(false);
        }
        legal_move_generator::is_legal_move(&self.board, from, to)
    }

    /// Every legal move for the side to move.
    ///
    /// ```
    /// use chess_core::game_state::chess_types::GameState;
    ///
    /// let mut game = GameState::new_game();
    /// assert_eq!(game.legal_moves().expect("both kings are present").len(), 20);
    ///
    /// game.apply_long_algebraic("e2e4").expect("double push is legal");
    /// let replies = game.legal_moves().expect("both kings are present");
    /// assert_eq!(replies.len(), 20);
    /// assert!(replies.iter().all(|(from, _)| from.rank() <= 1));
    /// ```
    pub fn legal_moves(&self) -> ChessResult<Vec<(Square, Square)>> {
        if self.phase != GamePhase::AwaitingMove {
            return Ok(Vec::new());
        }
        legal_move_generator::legal_moves_for_side(&self.board, self.side_to_move)
    }

    /// Whether the side to move has its king attacked.
    #[inline]
    pub fn is_in_check(&self) -> ChessResult<bool> {
        is_king_in_check(&self.board, self.side_to_move)
    }

    /// Validates and applies `from -> to`. On error the state is unchanged.
    #[inline]
    pub fn try_move(&mut self, from: Square, to: Square) -> ChessResult<MoveOutcome> {
        legal_move_apply::apply_move(self, from, to)
    }

    /// Replaces the waiting pawn with `kind`. The side does not flip again.
    #[inline]
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> ChessResult<()> {
        legal_move_apply::resolve_promotion(self, kind)
    }

    /// Applies a move written as `e2e4` or `e7e8q`.
    #[inline]
    pub fn apply_long_algebraic(&mut self, lan: &str) -> ChessResult<MoveOutcome> {
        legal_move_apply::apply_long_algebraic(self, lan)
    }

    fn is_selectable(&self, square: Square) -> bool {
        self.phase == GamePhase::AwaitingMove
            && matches!(self.board.occupant_at(square), Some(piece) if piece.side == self.side_to_move)
    }
}
