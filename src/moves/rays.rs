//! Stepping helpers shared by the per-piece destination generators.

use crate::game_state::chess_types::{BoardView, Side, Square};

/// Walks from `from` in direction `(d_rank, d_file)` one square at a time.
///
/// Empty squares are pushed and the walk continues. The first occupied
/// square ends the ray; it is pushed only when it holds a piece of the other
/// side.
pub fn trace_ray<V: BoardView + ?Sized>(
    view: &V,
    from: Square,
    side: Side,
    d_rank: i8,
    d_file: i8,
    out: &mut Vec<Square>,
) {
    let mut current = from;
    while let Some(next) = current.offset(d_rank, d_file) {
        match view.occupant_at(next) {
            None => out.push(next),
            Some(blocker) => {
                if blocker.side != side {
                    out.push(next);
                }
                break;
            }
        }
        current = next;
    }
}

/// Single-step version of [`trace_ray`] used by knights and kings.
#[inline]
pub fn push_if_open<V: BoardView + ?Sized>(
    view: &V,
    from: Square,
    side: Side,
    d_rank: i8,
    d_file: i8,
    out: &mut Vec<Square>,
) {
    let Some(target) = from.offset(d_rank, d_file) else {
        return;
    };
    match view.occupant_at(target) {
        Some(piece) if piece.side == side => {}
        _ => out.push(target),
    }
}
