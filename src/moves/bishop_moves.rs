use crate::game_state::chess_types::{BoardView, Side, Square};
use crate::moves::rays::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn bishop_destinations<V: BoardView + ?Sized>(
    view: &V,
    from: Square,
    side: Side,
    out: &mut Vec<Square>,
) {
    for (d_rank, d_file) in BISHOP_DIRECTIONS {
        trace_ray(view, from, side, d_rank, d_file, out);
    }
}
