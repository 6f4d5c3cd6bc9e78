//! Perft node counting.
//!
//! Walks the full legal move tree to a fixed depth and tallies leaf moves.
//! Each promotion choice counts as its own move, matching the usual perft
//! convention. Positions where castling or en passant would be legal will
//! not match published totals, since neither is modelled.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::{GameState, MoveOutcome};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut root = game_state.clone();
    root.record_history = false;
    root.move_history.clear();

    let mut total = PerftCounts::default();
    perft_recurse(&root, depth, &mut total)?;
    Ok(total)
}

fn perft_recurse(game_state: &GameState, depth: u8, total: &mut PerftCounts) -> ChessResult<()> {
    for (from, to) in game_state.legal_moves()? {
        let captured = game_state.board().occupant_at(to).is_some();

        let mut next = game_state.clone();
        let children = match next.try_move(from, to)? {
            MoveOutcome::Accepted => vec![next],
            MoveOutcome::AcceptedPendingPromotion(_) => PROMOTION_KINDS
                .iter()
                .map(|&kind| {
                    let mut promoted = next.clone();
                    promoted.resolve_promotion(kind).map(|()| promoted)
                })
                .collect::<ChessResult<Vec<_>>>()?,
        };
        let promoted = children.len() > 1;

        for child in children {
            if depth > 1 {
                perft_recurse(&child, depth - 1, total)?;
                continue;
            }

            total.nodes += 1;
            if captured {
                total.captures += 1;
            }
            if promoted {
                total.promotions += 1;
            }
            if child.is_in_check()? {
                total.checks += 1;
            }
        }
    }
    Ok(())
}
