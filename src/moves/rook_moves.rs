use crate::game_state::chess_types::{BoardView, Side, Square};
use crate::moves::rays::trace_ray;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn rook_destinations<V: BoardView + ?Sized>(
    view: &V,
    from: Square,
    side: Side,
    out: &mut Vec<Square>,
) {
    for (d_rank, d_file) in ROOK_DIRECTIONS {
        trace_ray(view, from, side, d_rank, d_file, out);
    }
}

#[cfg(test)]
mod tests {
    use super::rook_destinations;
    use crate::game_state::chess_types::{Board, Piece, PieceKind, Side, Square};

    fn sq(rank: i8, file: i8) -> Square {
        Square::new(rank, file).expect("test square should be in bounds")
    }

    #[test]
    fn rook_on_open_board_reaches_fourteen_squares() {
        let mut board = Board::new_empty();
        board.place(sq(4, 3), Piece::new(PieceKind::Rook, Side::White));
        let mut out = Vec::new();
        rook_destinations(&board, sq(4, 3), Side::White, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn clear_rank_runs_to_the_edge() {
        let mut board = Board::new_empty();
        board.place(sq(7, 0), Piece::new(PieceKind::Rook, Side::White));

        let mut out = Vec::new();
        rook_destinations(&board, sq(7, 0), Side::White, &mut out);

        let along_rank: Vec<Square> = out.iter().copied().filter(|x| x.rank() == 7).collect();
        let expected: Vec<Square> = (1..8).map(|file| sq(7, file)).collect();
        assert_eq!(along_rank, expected);
    }

    #[test]
    fn opposing_blocker_truncates_ray_inclusive() {
        let mut board = Board::new_empty();
        board.place(sq(7, 0), Piece::new(PieceKind::Rook, Side::White));
        board.place(sq(7, 4), Piece::new(PieceKind::Knight, Side::Black));

        let mut out = Vec::new();
        rook_destinations(&board, sq(7, 0), Side::White, &mut out);

        let along_rank: Vec<Square> = out.iter().copied().filter(|x| x.rank() == 7).collect();
        assert_eq!(along_rank, vec![sq(7, 1), sq(7, 2), sq(7, 3), sq(7, 4)]);
    }

    #[test]
    fn own_blocker_is_excluded() {
        let mut board = Board::new_empty();
        board.place(sq(7, 0), Piece::new(PieceKind::Rook, Side::White));
        board.place(sq(5, 0), Piece::new(PieceKind::Pawn, Side::White));

        let mut out = Vec::new();
        rook_destinations(&board, sq(7, 0), Side::White, &mut out);

        assert!(out.contains(&sq(6, 0)));
        assert!(!out.contains(&sq(5, 0)));
        assert!(!out.contains(&sq(4, 0)));
    }
}
