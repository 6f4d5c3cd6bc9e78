//! Pawn destinations.
//!
//! Pawns push straight ahead onto empty squares only (two squares from their
//! home rank when both are empty) and capture one square diagonally forward
//! onto an opposing piece only. En passant is not modelled.

use crate::game_state::chess_rules::{pawn_forward, pawn_home_rank};
use crate::game_state::chess_types::{BoardView, Side, Square};

pub fn pawn_destinations<V: BoardView + ?Sized>(
    view: &V,
    from: Square,
    side: Side,
    out: &mut Vec<Square>,
) {
    let forward = pawn_forward(side);

    if let Some(one_step) = from.offset(forward, 0) {
        if view.occupant_at(one_step).is_none() {
            out.push(one_step);

            if from.rank() == pawn_home_rank(side) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if view.occupant_at(two_step).is_none() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_file in [-1i8, 1i8] {
        let Some(target) = from.offset(forward, d_file) else {
            continue;
        };
        if matches!(view.occupant_at(target), Some(piece) if piece.side != side) {
            out.push(target);
        }
    }
}
