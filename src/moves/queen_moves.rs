use crate::game_state::chess_types::{BoardView, Side, Square};
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::rook_moves::rook_destinations;

#[inline]
pub fn queen_destinations<V: BoardView + ?Sized>(
    view: &V,
    from: Square,
    side: Side,
    out: &mut Vec<Square>,
) {
    rook_destinations(view, from, side, out);
    bishop_destinations(view, from, side, out);
}
