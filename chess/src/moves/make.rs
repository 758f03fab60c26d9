use super::base::{Move, MoveKind};
use crate::board::{Board, Chessman};
use crate::types::{CastlingSide, Color, Piece};
use crate::{castling, enpassant};

use log::trace;

/// Applies the move `mv` to the board `b` and returns the captured man, if any
///
/// The move is not validated, so only pass moves accepted by
/// [`validate()`](crate::validate::validate). Applying an unvalidated move keeps the board
/// consistent, but the resulting position may break the rules of chess.
pub fn make_move_unchecked(b: &mut Board, mv: Move) -> Option<Chessman> {
    let mover = *b.get(mv.src())?;
    let ep_target = b.state.ep_target.take();

    let captured_at = match mv.kind() {
        MoveKind::Enpassant => {
            ep_target.map(|target| enpassant::captured_square(target, mover.color))
        }
        _ => Some(mv.dst()),
    };
    let captured = captured_at.and_then(|c| b.remove(c));

    b.relocate(mv.src(), mv.dst());

    if let Ok(side) = CastlingSide::try_from(mv.kind()) {
        b.relocate(
            castling::rook_src(mover.color, side),
            castling::rook_dst(mover.color, side),
        );
    }

    if let Some(piece) = mv.kind().promote() {
        if let Some(man) = b.man_id(mv.dst()).and_then(|id| b.man_mut(id)) {
            man.piece = piece;
        }
    }

    b.state.ep_target = enpassant::target_after(&mover, mv.src(), mv.dst());
    castling::update_rights(&mut b.state.castling, &mover, mv.src(), mv.dst());

    if captured.is_some() || mover.piece == Piece::Pawn {
        b.state.halfmove_clock = 0;
    } else {
        b.state.halfmove_clock = b.state.halfmove_clock.saturating_add(1);
    }
    if mover.color == Color::Black {
        b.state.fullmove_number = b.state.fullmove_number.saturating_add(1);
    }
    b.state.side = mover.color.inv();

    if cfg!(feature = "selftest") {
        assert!(b.is_consistent(), "board is inconsistent after {}", mv);
    }
    trace!("made move {}, position {}", mv, b.as_fen());

    captured
}
