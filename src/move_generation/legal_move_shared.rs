//! Geometry dispatch and the provisional board used by king-safety checks.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Board, BoardView, Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// Squares the piece on `from` could reach by movement geometry alone.
///
/// Blocking and own-piece exclusion are applied; whether the move would
/// expose the mover's king is not. An empty `from` yields no destinations.
pub fn candidate_destinations<V: BoardView + ?Sized>(view: &V, from: Square) -> Vec<Square> {
    let Some(piece) = view.occupant_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(27);
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(view, from, piece.side, &mut out),
        PieceKind::Knight => knight_destinations(view, from, piece.side, &mut out),
        PieceKind::Bishop => bishop_destinations(view, from, piece.side, &mut out),
        PieceKind::Rook => rook_destinations(view, from, piece.side, &mut out),
        PieceKind::Queen => queen_destinations(view, from, piece.side, &mut out),
        PieceKind::King => king_destinations(view, from, piece.side, &mut out),
    }
    out
}

/// The board as it would look after `from -> to`, without touching it.
///
/// `provisionally_vacated` reads as empty and `provisionally_occupied` reads
/// as holding the mover; every other square reads through to the real board.
#[derive(Debug, Clone, Copy)]
pub struct ProvisionalBoard<'a> {
    board: &'a Board,
    provisionally_vacated: Square,
    provisionally_occupied: Square,
    mover: Piece,
}

impl<'a> ProvisionalBoard<'a> {
    pub fn new(board: &'a Board, from: Square, to: Square) -> ChessResult<Self> {
        let mover = board
            .occupant_at(from)
            .ok_or(ChessErrors::NoPieceAtSquare(from))?;
        Ok(Self {
            board,
            provisionally_vacated: from,
            provisionally_occupied: to,
            mover,
        })
    }

    #[inline]
    pub fn mover(&self) -> Piece {
        self.mover
    }
}

impl BoardView for ProvisionalBoard<'_> {
    #[inline]
    fn occupant_at(&self, square: Square) -> Option<Piece> {
        if square == self.provisionally_occupied {
            Some(self.mover)
        } else if square == self.provisionally_vacated {
            None
        } else {
            self.board.occupant_at(square)
        }
    }
}
