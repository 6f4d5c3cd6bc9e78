//! Per-game configuration.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Placement and side to move the game starts from.
    pub starting_fen: String,
    /// Keep accepted moves in long algebraic form.
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_fen: STARTING_POSITION_FEN.to_owned(),
            record_history: true,
        }
    }
}

impl GameConfig {
    pub fn from_fen(fen: &str) -> Self {
        Self {
            starting_fen: fen.to_owned(),
            ..Self::default()
        }
    }

    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}
