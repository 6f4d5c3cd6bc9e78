//! Long algebraic coordinates.
//!
//! Converts between board squares and strings such as `e2`, and between
//! moves and strings such as `e2e4` or `e7e8q`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};

/// Convert a coordinate such as `"e4"` to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if !square.is_ascii() || bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(char::from(file)));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(char::from(rank)));
    }

    Square::new((b'8' - rank) as i8, (file - b'a') as i8)
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Parse `"e2e4"` or `"e7e8q"` into source, target and optional promotion kind.
///
/// Any piece letter is accepted as a suffix; whether it is a valid promotion
/// choice is for the caller to decide.
pub fn long_algebraic_to_move(lan: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    if !lan.is_ascii() || !(4..=5).contains(&lan.len()) {
        return Err(ChessErrors::InvalidAlgebraicString(lan.to_owned()));
    }

    let from = algebraic_to_square(&lan[0..2])?;
    let to = algebraic_to_square(&lan[2..4])?;
    let promotion = match lan[4..].chars().next() {
        None => None,
        Some(ch) => Some(PieceKind::from_letter(ch).ok_or(ChessErrors::InvalidAlgebraicChar(ch))?),
    };

    Ok((from, to, promotion))
}

pub fn move_to_long_algebraic(from: Square, to: Square, promotion: Option<PieceKind>) -> String {
    let mut out = format!("{from}{to}");
    if let Some(kind) = promotion {
        out.push(kind.letter());
    }
    out
}
