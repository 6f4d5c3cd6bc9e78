//! King-safety checks.
//!
//! A move is king-safe when, on the provisional board after the move, no
//! piece of the other side has the mover's king square among its candidate
//! destinations. Attackers are found by running the ordinary geometry
//! generators from every opposing piece, so pawns only "attack" diagonally
//! and sliders are stopped by blockers exactly as they are when moving.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Board, BoardView, Side, Square};
use crate::move_generation::legal_move_shared::{candidate_destinations, ProvisionalBoard};

/// Whether any piece of `attacker` can reach `target` on `view`.
pub fn is_square_attacked<V: BoardView + ?Sized>(view: &V, target: Square, attacker: Side) -> bool {
    view.squares_of(attacker)
        .into_iter()
        .any(|from| candidate_destinations(view, from).contains(&target))
}

#[inline]
pub fn is_king_in_check(board: &Board, side: Side) -> ChessResult<bool> {
    let king = board.find_king(side)?;
    Ok(is_square_attacked(board, king, side.opposite()))
}

/// Simulates `from -> to` and reports whether the mover's king stays safe.
///
/// If the king itself is moving, its simulated square is `to`. A piece
/// captured on `to` is hidden by the mover and so never counts as an
/// attacker.
pub fn leaves_king_safe(board: &Board, from: Square, to: Square) -> ChessResult<bool> {
    let overlay = ProvisionalBoard::new(board, from, to)?;
    let side = overlay.mover().side;
    let king = overlay.find_king(side)?;
    Ok(!is_square_attacked(&overlay, king, side.opposite()))
}
