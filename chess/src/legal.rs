//! King safety check by simulating the move
//!
//! The move is played on the board for a moment, the mover's king square is checked for attacks,
//! and the board is restored. Pins and discovered checks need no special handling: the scan after
//! the simulated move sees them.

use crate::attack;
use crate::board::{Board, ManId};
use crate::castling;
use crate::enpassant;
use crate::moves::{Move, MoveKind};
use crate::types::{CastlingSide, Color, Coord, Piece};

/// Move played on a board for the duration of a check
///
/// Dropping the probe restores the board exactly, so it holds on every exit path. While the
/// probe lives, the board is only reachable through it.
struct Probe<'a> {
    board: &'a mut Board,
    src: Coord,
    dst: Coord,
    mover: ManId,
    captured: Option<(Coord, ManId)>,
}

impl<'a> Probe<'a> {
    /// Plays `mv` on `board`, returning `None` if there is no man on the source square
    fn new(board: &'a mut Board, mv: Move) -> Option<Probe<'a>> {
        let (src, dst) = (mv.src(), mv.dst());
        let mover = board.man_id(src)?;
        let captured_at = match mv.kind() {
            MoveKind::Enpassant => {
                let color = board.man(mover)?.color;
                enpassant::captured_square(dst, color)
            }
            _ => dst,
        };
        let captured = board.man_id(captured_at).map(|id| (captured_at, id));

        if let Some((at, _)) = captured {
            board.set_square(at, None);
        }
        board.set_square(src, None);
        board.set_square(dst, Some(mover));
        if let Some(man) = board.man_mut(mover) {
            man.coord = dst;
        }

        Some(Probe {
            board,
            src,
            dst,
            mover,
            captured,
        })
    }

    /// Returns `true` if the king of color `c` is not attacked in the probed position
    fn is_king_safe(&self, c: Color) -> bool {
        let moved_king = self
            .board
            .man(self.mover)
            .filter(|man| man.is(c, Piece::King))
            .map(|man| man.coord);
        match moved_king.or_else(|| self.board.king_pos(c)) {
            Some(king) => !attack::is_square_attacked(&*self.board, king, c.inv()),
            None => true,
        }
    }
}

impl<'a> Drop for Probe<'a> {
    fn drop(&mut self) {
        self.board.set_square(self.dst, None);
        if let Some((at, id)) = self.captured {
            self.board.set_square(at, Some(id));
        }
        self.board.set_square(self.src, Some(self.mover));
        if let Some(man) = self.board.man_mut(self.mover) {
            man.coord = self.src;
        }
    }
}

/// Returns `true` if playing `mv` does not leave the mover's king attacked
///
/// The board is used as scratch space: it is modified during the call, but after the call it is
/// equal to the board before, whatever the verdict. Castling moves are delegated to
/// [`castling::check()`], as the king path matters for them, not only the final square.
pub fn is_safe(b: &mut Board, mv: Move) -> bool {
    if let Ok(side) = CastlingSide::try_from(mv.kind()) {
        return castling::check(b, mv.side(), side).is_ok();
    }
    match Probe::new(b, mv) {
        Some(probe) => probe.is_king_safe(mv.side()),
        None => false,
    }
}

/// Same as [`is_safe()`], but probes a private copy of `b`
pub fn is_legal(b: &Board, mv: Move) -> bool {
    let mut snapshot = *b;
    is_safe(&mut snapshot, mv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(fen: &str, uci: &str) -> bool {
        let mut b = Board::from_fen(fen).unwrap();
        let before = b;
        let mv = Move::from_uci(uci, &b).unwrap();
        let res = is_safe(&mut b, mv);
        assert_eq!(b, before);
        assert!(b.is_consistent());
        res
    }

    #[test]
    fn test_pin() {
        const FEN: &str = "4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1";
        assert!(!check(FEN, "e2c3"));
        assert!(check(FEN, "e1d1"));
    }

    #[test]
    fn test_king_moves() {
        const FEN: &str = "4k3/8/8/8/8/8/3r4/4K3 w - - 0 1";
        assert!(check(FEN, "e1d2"));
        assert!(!check(FEN, "e1e2"));
        assert!(check(FEN, "e1f1"));
        assert!(!check(FEN, "e1d1"));
    }

    #[test]
    fn test_defended_capture() {
        assert!(!check("4k3/8/8/8/8/8/3r4/3rK3 w - - 0 1", "e1d1"));
        assert!(check("4k3/8/8/8/8/8/8/3rK3 w - - 0 1", "e1d1"));
    }

    #[test]
    fn test_enpassant_discovered() {
        const FEN: &str = "8/8/8/K2pP2r/8/8/8/7k w - d6 0 1";
        assert!(!check(FEN, "e5d6"));
        assert!(check(FEN, "e5e6"));
    }

    #[test]
    fn test_castling() {
        assert!(check("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1g1"));
        assert!(!check("r3k2r/8/8/8/8/8/6r1/R3K2R w KQkq - 0 1", "e1g1"));
    }

    #[test]
    fn test_is_legal_keeps_board() {
        let b = Board::initial();
        let mv = Move::from_uci("e2e4", &b).unwrap();
        assert!(is_legal(&b, mv));
        assert_eq!(b, Board::initial());
    }
}
