//! Crate root module declarations for the chess_core rule engine.
//!
//! The crate validates and applies moves for a two-player game on an 8x8
//! board under standard piece movement. It exposes the board model, the
//! per-piece geometry generators, the king-safety and legality checks, the
//! game session state with its promotion phase, and notation helpers for
//! FEN and long algebraic coordinates.
//!
//! Castling, en passant, and checkmate/stalemate or draw detection are not
//! part of this engine; callers decide when a game is over.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
