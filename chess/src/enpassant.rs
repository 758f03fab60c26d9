//! En passant target tracking

use crate::board::{Chessman, RawBoard};
use crate::geometry;
use crate::types::{Cell, Color, Coord, Piece, Rank};

/// Returns the en passant target created by moving `man` from `src` to `dst`
///
/// Only a pawn double move creates a target: the square the pawn passed over.
pub fn target_after(man: &Chessman, src: Coord, dst: Coord) -> Option<Coord> {
    if man.piece != Piece::Pawn || src.file() != dst.file() || src.rank_distance(dst) != 2 {
        return None;
    }
    Some(Coord::from_index((src.index() + dst.index()) / 2))
}

/// Returns the square of the pawn captured by a pawn of color `capturer` moving onto `target`
pub const fn captured_square(target: Coord, capturer: Color) -> Coord {
    let rank = match capturer {
        Color::White => Rank::R5,
        Color::Black => Rank::R4,
    };
    Coord::from_parts(target.file(), rank)
}

/// Returns `true` if `target` may follow a double move by the side which is not to move
///
/// The target must be on the right rank, the passed square and the square the pawn started from
/// must be empty, and the pawn must stand right behind the target.
pub(crate) fn is_plausible_target(raw: &RawBoard, target: Coord) -> bool {
    let side = raw.state.side;
    let them = side.inv();
    if target.rank() != geometry::enpassant_target_rank(them) {
        return false;
    }
    let start = Coord::from_parts(target.file(), geometry::pawn_home_rank(them));
    raw.get(target).is_empty()
        && raw.get(start).is_empty()
        && raw.get(captured_square(target, side)) == Cell::from_parts(them, Piece::Pawn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(s: &str) -> Coord {
        s.parse().unwrap()
    }

    fn pawn(color: Color, s: &str) -> Chessman {
        Chessman {
            piece: Piece::Pawn,
            color,
            moved: false,
            coord: coord(s),
        }
    }

    #[test]
    fn test_target_after() {
        let black = pawn(Color::Black, "e7");
        assert_eq!(
            target_after(&black, coord("e7"), coord("e5")),
            Some(coord("e6"))
        );
        assert_eq!(target_after(&black, coord("e7"), coord("e6")), None);

        let white = pawn(Color::White, "a2");
        assert_eq!(
            target_after(&white, coord("a2"), coord("a4")),
            Some(coord("a3"))
        );

        let rook = Chessman {
            piece: Piece::Rook,
            ..white
        };
        assert_eq!(target_after(&rook, coord("a2"), coord("a4")), None);
    }

    #[test]
    fn test_captured_square() {
        assert_eq!(captured_square(coord("e6"), Color::White), coord("e5"));
        assert_eq!(captured_square(coord("c3"), Color::Black), coord("c4"));
    }

    #[test]
    fn test_plausible() {
        let raw = RawBoard::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        assert!(is_plausible_target(&raw, coord("d6")));
        assert!(!is_plausible_target(&raw, coord("e6")));
        assert!(!is_plausible_target(&raw, coord("d3")));

        let raw = RawBoard::from_fen("4k3/3p4/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        assert!(!is_plausible_target(&raw, coord("d6")));
    }
}
