//! Canonical chess-rule constants.
//!
//! Starting placement, pawn direction and the ranks that trigger the pawn
//! double step and promotion.

use crate::game_state::chess_types::{PieceKind, Side};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Pass-through fields that follow the side-to-move field in the starting FEN.
pub const STARTING_POSITION_FEN_TAIL: &str = "KQkq - 0 1";

/// Back-rank order from file a to file h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Kinds a pawn may become, in the order they are usually offered.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Rank holding the side's king and officers at the start.
#[inline]
pub const fn back_rank(side: Side) -> u8 {
    match side {
        Side::White => 7,
        Side::Black => 0,
    }
}

/// Rank holding the side's pawns at the start; pawns there may double step.
#[inline]
pub const fn pawn_home_rank(side: Side) -> u8 {
    match side {
        Side::White => 6,
        Side::Black => 1,
    }
}

/// Rank delta of a single pawn advance.
#[inline]
pub const fn pawn_forward(side: Side) -> i8 {
    match side {
        Side::White => -1,
        Side::Black => 1,
    }
}

/// Farthest rank from the side's own back row.
#[inline]
pub const fn promotion_rank(side: Side) -> u8 {
    back_rank(side.opposite())
}
