//! FEN-to-GameState parser.
//!
//! Only the placement and side-to-move fields are interpreted. Whatever
//! follows them (castling, en passant, clocks) is stored verbatim and written
//! back unchanged by the generator.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Board, GameState, Piece, PieceKind, Side, Square};
use crate::move_generation::legal_move_checks::is_square_attacked;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFENstringForm("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFENstringForm("missing side to move".to_owned()))?;

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;

    // The side that just moved may not have left its king attacked.
    let waiting = side_to_move.opposite();
    if let Ok(king) = board.find_king(waiting) {
        if is_square_attacked(&board, king, side_to_move) {
            return Err(ChessErrors::InvalidFENstringForm(format!(
                "{waiting} is in check but {side_to_move} is to move"
            )));
        }
    }

    let mut game_state = GameState::from_board(board, side_to_move);
    game_state.fen_tail = parts.collect::<Vec<_>>().join(" ");
    Ok(game_state)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFENstringForm(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::new_empty();
    let mut king_counts = [0usize; 2];

    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFENtoken(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(ChessErrors::InvalidFENtoken(ch))?;
            if file >= 8 {
                return Err(ChessErrors::InvalidFENstringForm(format!(
                    "rank {rank_str} has too many files"
                )));
            }

            if piece.kind == PieceKind::King {
                king_counts[piece.side.index()] += 1;
                if king_counts[piece.side.index()] > 1 {
                    return Err(ChessErrors::TooManyKings(piece.side));
                }
            }

            board.place(Square::new(rank as i8, file as i8)?, piece);
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFENstringForm(format!(
                "rank {rank_str} does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Side> {
    match side_part {
        "w" => Ok(Side::White),
        "b" => Ok(Side::Black),
        _ => Err(ChessErrors::InvalidFENstringForm(format!(
            "invalid side to move {side_part}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Board, Side};
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.board(), &Board::standard());
        assert_eq!(game_state.current_side(), Side::White);
        assert_eq!(game_state.fen_tail(), "KQkq - 0 1");
    }

    #[test]
    fn tail_fields_are_optional() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 b").expect("two-field FEN should parse");
        assert_eq!(game_state.current_side(), Side::Black);
        assert_eq!(game_state.fen_tail(), "");
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8 w"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert!(matches!(
            parse_fen("9/8/8/8/8/8/8/8 w"),
            Err(ChessErrors::InvalidFENtoken('9'))
        ));
        assert!(matches!(
            parse_fen("4x3/8/8/8/8/8/8/8 w"),
            Err(ChessErrors::InvalidFENtoken('x'))
        ));
        assert!(matches!(
            parse_fen("4k4/8/8/8/8/8/8/8 w"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 x"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert!(matches!(
            parse_fen(""),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
    }

    #[test]
    fn second_king_of_a_side_is_rejected() {
        assert_eq!(
            parse_fen("k6k/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessErrors::TooManyKings(Side::Black))
        );
    }

    #[test]
    fn side_not_to_move_may_not_stand_in_check() {
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/K3R3 w"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));

        let game_state = parse_fen("4k3/8/8/8/8/8/8/K3R3 b").expect("black to move out of check");
        assert_eq!(game_state.is_in_check(), Ok(true));
        // A kingless side cannot be in check.
        assert!(parse_fen("8/8/8/8/8/8/8/K3R3 w").is_ok());
    }
}
