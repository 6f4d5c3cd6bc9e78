//! Committing moves and promotions to a `GameState`.
//!
//! Every check runs before the first write, so a rejected request leaves the
//! game exactly as it was.

use tracing::{debug, error, trace};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::{GamePhase, GameState, MoveOutcome, Piece, PieceKind, Square};
use crate::move_generation::legal_move_generator::is_legal_move;
use crate::utils::algebraic::{long_algebraic_to_move, move_to_long_algebraic};

pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> ChessResult<MoveOutcome> {
    if let GamePhase::AwaitingPromotion { square, .. } = game_state.phase {
        trace!(%from, %to, pending = %square, "move rejected: promotion pending");
        return Err(ChessErrors::PromotionPending(square));
    }

    let piece = game_state
        .board
        .occupant_at(from)
        .ok_or(ChessErrors::NoPieceAtSquare(from))?;

    if piece.side != game_state.side_to_move {
        trace!(%from, %to, owner = %piece.side, "move rejected: not this side's turn");
        return Err(ChessErrors::NotYourTurn {
            square: from,
            owner: piece.side,
            active: game_state.side_to_move,
        });
    }

    let legal = is_legal_move(&game_state.board, from, to).inspect_err(|err| {
        if err.is_fatal() {
            error!(%from, %to, %err, "position is corrupt");
        }
    })?;
    if !legal {
        trace!(%from, %to, kind = %piece.kind, "move rejected: illegal");
        return Err(ChessErrors::IllegalMove { from, to });
    }

    let captured = game_state.board.remove(to);
    game_state.board.remove(from);
    game_state.board.place(to, piece);
    game_state.side_to_move = piece.side.opposite();

    if game_state.record_history {
        game_state
            .move_history
            .push(move_to_long_algebraic(from, to, None));
    }

    debug!(
        %from,
        %to,
        kind = %piece.kind,
        captured = ?captured.map(|x| x.kind),
        next = %game_state.side_to_move,
        "move applied"
    );

    if piece.kind == PieceKind::Pawn && to.rank() == promotion_rank(piece.side) {
        game_state.phase = GamePhase::AwaitingPromotion {
            square: to,
            side: piece.side,
        };
        debug!(square = %to, side = %piece.side, "awaiting promotion");
        return Ok(MoveOutcome::AcceptedPendingPromotion(to));
    }

    Ok(MoveOutcome::Accepted)
}

pub fn resolve_promotion(game_state: &mut GameState, kind: PieceKind) -> ChessResult<()> {
    let GamePhase::AwaitingPromotion { square, side } = game_state.phase else {
        return Err(ChessErrors::NoPromotionPending);
    };
    if !kind.is_promotion_choice() {
        return Err(ChessErrors::InvalidPromotionKind(kind));
    }

    game_state.board.place(square, Piece::new(kind, side));
    game_state.phase = GamePhase::AwaitingMove;

    if game_state.record_history {
        if let Some(last) = game_state.move_history.last_mut() {
            last.push(kind.letter());
        }
    }

    debug!(%square, %side, %kind, "promotion resolved");
    Ok(())
}

/// Applies `e2e4`-style input. A promotion suffix on a move that does not
/// promote is rejected before anything changes.
pub fn apply_long_algebraic(game_state: &mut GameState, lan: &str) -> ChessResult<MoveOutcome> {
    let (from, to, promotion) = long_algebraic_to_move(lan)?;

    if let Some(kind) = promotion {
        if !kind.is_promotion_choice() {
            return Err(ChessErrors::InvalidPromotionKind(kind));
        }
        let promotes = matches!(
            game_state.board.occupant_at(from),
            Some(piece) if piece.kind == PieceKind::Pawn && to.rank() == promotion_rank(piece.side)
        );
        if !promotes {
            return Err(ChessErrors::IllegalMove { from, to });
        }
    }

    let outcome = apply_move(game_state, from, to)?;
    match (outcome, promotion) {
        (MoveOutcome::AcceptedPendingPromotion(_), Some(kind)) => {
            resolve_promotion(game_state, kind)?;
            Ok(MoveOutcome::Accepted)
        }
        _ => Ok(outcome),
    }
}
