use crate::game_state::chess_types::{BoardView, Side, Square};
use crate::moves::rays::push_if_open;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub fn knight_destinations<V: BoardView + ?Sized>(
    view: &V,
    from: Square,
    side: Side,
    out: &mut Vec<Square>,
) {
    for (d_rank, d_file) in KNIGHT_OFFSETS {
        push_if_open(view, from, side, d_rank, d_file, out);
    }
}
