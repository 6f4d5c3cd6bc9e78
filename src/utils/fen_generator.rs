use crate::game_state::chess_types::{Board, GameState, Side, Square};

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state.board());
    let side_to_move = match game_state.current_side() {
        Side::White => "w",
        Side::Black => "b",
    };

    if game_state.fen_tail().is_empty() {
        format!("{board} {side_to_move}")
    } else {
        format!("{board} {side_to_move} {}", game_state.fen_tail())
    }
}

/// Placement field only, ranks listed from Black's back row down.
pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in 0..8i8 {
        let mut empty_count = 0u8;

        for file in 0..8i8 {
            let occupant = Square::new(rank, file)
                .ok()
                .and_then(|square| board.occupant_at(square));
            if let Some(piece) = occupant {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank < 7 {
            out.push('/');
        }
    }

    out
}
