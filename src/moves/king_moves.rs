use crate::game_state::chess_types::{BoardView, Side, Square};
use crate::moves::rays::push_if_open;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn king_destinations<V: BoardView + ?Sized>(
    view: &V,
    from: Square,
    side: Side,
    out: &mut Vec<Square>,
) {
    for (d_rank, d_file) in KING_OFFSETS {
        push_if_open(view, from, side, d_rank, d_file, out);
    }
}

#[cfg(test)]
mod tests {
    use super::king_destinations;
    use crate::game_state::chess_types::{Board, Piece, PieceKind, Side, Square};

    #[test]
    fn king_in_the_corner_has_three_targets() {
        let h1 = Square::new(7, 7).expect("h1 should be in bounds");
        let mut board = Board::new_empty();
        board.place(h1, Piece::new(PieceKind::King, Side::White));
        let mut out = Vec::new();
        king_destinations(&board, h1, Side::White, &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn king_boxed_in_by_own_pieces_cannot_step() {
        let board = Board::standard();
        let e1 = Square::new(7, 4).expect("e1 should be in bounds");
        let mut out = Vec::new();
        king_destinations(&board, e1, Side::White, &mut out);
        assert!(out.is_empty());
    }
}
