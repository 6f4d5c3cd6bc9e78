//! Errors used throughout the rule engine.
//!
//! `ChessErrors` is the single error type returned by board access, move
//! validation, promotion handling and the notation utilities. Variants carry
//! the offending square, side or token so callers can re-prompt with a
//! precise message.
//!
//! Usage guidelines:
//! - `IllegalMove`, `NoPieceAtSquare`, `NotYourTurn` and `PromotionPending`
//!   are expected during play. The game state is untouched when they are
//!   returned, so the caller can simply ask for another move.
//! - `OutOfBounds` and the notation variants mean the caller handed in
//!   malformed input.
//! - `KingNotFound` and `TooManyKings` mean the position itself is corrupt
//!   and retrying will not help.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Side, Square};

/// Convenience alias used by every fallible operation in the crate.
pub type ChessResult<T> = Result<T, ChessErrors>;

/// Unified error type for the rule engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A (rank, file) pair outside the 8x8 grid.
    #[error("coordinate ({rank}, {file}) is outside the 8x8 board")]
    OutOfBounds { rank: i8, file: i8 },

    /// The move fails piece geometry, is blocked, or would leave the mover's
    /// king attacked.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The selected source square is empty.
    #[error("no piece on {0}")]
    NoPieceAtSquare(Square),

    /// The selected piece belongs to the side that is not on move.
    #[error("piece on {square} belongs to {owner} but {active} is to move")]
    NotYourTurn {
        square: Square,
        owner: Side,
        active: Side,
    },

    /// The given side has no king on the board.
    #[error("no {0} king on the board")]
    KingNotFound(Side),

    /// A placement contained more than one king for the given side.
    #[error("{0} has more than one king")]
    TooManyKings(Side),

    /// A pawn on the payload square is waiting for its promotion choice.
    #[error("promotion on {0} must be resolved before the next move")]
    PromotionPending(Square),

    /// `resolve_promotion` was called while no pawn was waiting.
    #[error("no promotion is pending")]
    NoPromotionPending,

    /// Pawns and kings are not valid promotion choices.
    #[error("cannot promote to {0}")]
    InvalidPromotionKind(PieceKind),

    /// A single character in a coordinate or move string was invalid.
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// A coordinate or move string had the wrong shape.
    #[error("invalid algebraic string \"{0}\"")]
    InvalidAlgebraicString(String),

    /// Unexpected character in the board field of a FEN string.
    #[error("invalid FEN token '{0}'")]
    InvalidFENtoken(char),

    /// FEN string with malformed structure.
    #[error("malformed FEN: {0}")]
    InvalidFENstringForm(String),
}

impl ChessErrors {
    /// True for errors that indicate a corrupted position rather than a bad
    /// request.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ChessErrors::KingNotFound(_) | ChessErrors::TooManyKings(_)
        )
    }
}
