//! 8x8 square storage.
//!
//! `Board` knows nothing about legality. It stores at most one piece per
//! square and answers occupancy questions with linear scans. Move generation
//! reads it through the [`BoardView`] trait so that a simulated position can
//! stand in for the real one.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{back_rank, pawn_home_rank, BACK_RANK};
use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

/// Read access to piece placement.
pub trait BoardView {
    fn occupant_at(&self, square: Square) -> Option<Piece>;

    /// Square of the given side's king.
    fn find_king(&self, side: Side) -> ChessResult<Square> {
        let king = Piece::new(PieceKind::King, side);
        Square::all()
            .find(|&square| self.occupant_at(square) == Some(king))
            .ok_or(ChessErrors::KingNotFound(side))
    }

    /// Squares holding a piece of `side`, in row-major order.
    fn squares_of(&self, side: Side) -> Vec<Square> {
        Square::all()
            .filter(|&square| matches!(self.occupant_at(square), Some(piece) if piece.side == side))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting placement.
    pub fn standard() -> Self {
        let mut board = Self::new_empty();
        for side in [Side::White, Side::Black] {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back_rank(side) as usize][file] = Some(Piece::new(*kind, side));
                board.squares[pawn_home_rank(side) as usize][file] =
                    Some(Piece::new(PieceKind::Pawn, side));
            }
        }
        board
    }

    #[inline]
    pub fn occupant_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    /// Occupant lookup for raw coordinates coming from outside the crate.
    pub fn occupant_at_coords(&self, rank: i8, file: i8) -> ChessResult<Option<Piece>> {
        Ok(self.occupant_at(Square::new(rank, file)?))
    }

    /// Unconditional write; any previous occupant is dropped.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.rank() as usize][square.file() as usize] = Some(piece);
    }

    /// Clears the square and hands back what was on it.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }

    #[inline]
    pub fn find_king(&self, side: Side) -> ChessResult<Square> {
        BoardView::find_king(self, side)
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.occupant_at(square).map(|piece| (square, piece)))
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, piece)| piece.side == side).count()
    }
}

impl BoardView for Board {
    #[inline]
    fn occupant_at(&self, square: Square) -> Option<Piece> {
        Board::occupant_at(self, square)
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, BoardView};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

    fn sq(rank: i8, file: i8) -> Square {
        Square::new(rank, file).expect("test square should be in bounds")
    }

    #[test]
    fn standard_layout_has_sixteen_pieces_per_side() {
        let board = Board::standard();
        assert_eq!(board.piece_count(Side::White), 16);
        assert_eq!(board.piece_count(Side::Black), 16);
        assert_eq!(
            board.occupant_at(sq(7, 3)),
            Some(Piece::new(PieceKind::Queen, Side::White))
        );
        assert_eq!(
            board.occupant_at(sq(0, 4)),
            Some(Piece::new(PieceKind::King, Side::Black))
        );
        for file in 0..8 {
            assert_eq!(
                board.occupant_at(sq(6, file)),
                Some(Piece::new(PieceKind::Pawn, Side::White))
            );
            assert_eq!(
                board.occupant_at(sq(1, file)),
                Some(Piece::new(PieceKind::Pawn, Side::Black))
            );
            for rank in 2..6 {
                assert_eq!(board.occupant_at(sq(rank, file)), None);
            }
        }
    }

    #[test]
    fn place_overwrites_and_remove_returns_occupant() {
        let mut board = Board::new_empty();
        let rook = Piece::new(PieceKind::Rook, Side::Black);
        let knight = Piece::new(PieceKind::Knight, Side::White);

        board.place(sq(3, 3), rook);
        board.place(sq(3, 3), knight);
        assert_eq!(board.occupant_at(sq(3, 3)), Some(knight));
        assert_eq!(board.remove(sq(3, 3)), Some(knight));
        assert_eq!(board.remove(sq(3, 3)), None);
    }

    #[test]
    fn raw_coordinates_are_bounds_checked() {
        let board = Board::standard();
        assert_eq!(
            board.occupant_at_coords(-1, 4),
            Err(ChessErrors::OutOfBounds { rank: -1, file: 4 })
        );
        assert_eq!(
            board.occupant_at_coords(7, 4),
            Ok(Some(Piece::new(PieceKind::King, Side::White)))
        );
    }

    #[test]
    fn find_king_scans_for_the_right_side() {
        let board = Board::standard();
        assert_eq!(board.find_king(Side::White), Ok(sq(7, 4)));
        assert_eq!(board.find_king(Side::Black), Ok(sq(0, 4)));
        assert_eq!(
            Board::new_empty().find_king(Side::White),
            Err(ChessErrors::KingNotFound(Side::White))
        );
    }

    #[test]
    fn squares_of_lists_only_that_side() {
        let board = Board::standard();
        let black = board.squares_of(Side::Black);
        assert_eq!(black.len(), 16);
        assert!(black.iter().all(|square| square.rank() <= 1));
    }
}
