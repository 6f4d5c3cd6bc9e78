//! Legal move queries over a bare board.
//!
//! These functions ignore whose turn it is; `GameState` layers turn order
//! and promotion state on top of them.

use std::collections::BTreeSet;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Board, BoardView, PieceKind, Side, Square};
use crate::move_generation::legal_move_checks::leaves_king_safe;
use crate::move_generation::legal_move_shared::candidate_destinations;

/// Kings are attacked, never taken.
#[inline]
fn holds_king(board: &Board, square: Square) -> bool {
    matches!(board.occupant_at(square), Some(piece) if piece.kind == PieceKind::King)
}

/// Geometry, blocking and king safety for a single move.
pub fn is_legal_move(board: &Board, from: Square, to: Square) -> ChessResult<bool> {
    if board.occupant_at(from).is_none() || holds_king(board, to) {
        return Ok(false);
    }
    if !candidate_destinations(board, from).contains(&to) {
        return Ok(false);
    }
    leaves_king_safe(board, from, to)
}

/// Legal destinations for the piece on `from`; empty when `from` is empty.
pub fn legal_destinations(board: &Board, from: Square) -> ChessResult<BTreeSet<Square>> {
    let mut legal = BTreeSet::new();
    if board.occupant_at(from).is_none() {
        return Ok(legal);
    }

    for to in candidate_destinations(board, from) {
        if holds_king(board, to) {
            continue;
        }
        if leaves_king_safe(board, from, to)? {
            legal.insert(to);
        }
    }
    Ok(legal)
}

/// Every legal `(from, to)` pair for `side`, ordered by source then target.
pub fn legal_moves_for_side(board: &Board, side: Side) -> ChessResult<Vec<(Square, Square)>> {
    let mut moves = Vec::with_capacity(64);
    for from in board.squares_of(side) {
        for to in legal_destinations(board, from)? {
            moves.push((from, to));
        }
    }
    Ok(moves)
}
