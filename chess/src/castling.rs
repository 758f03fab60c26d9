//! Castling rights bookkeeping and castling legality

use crate::attack;
use crate::bitboard::Bitboard;
use crate::board::{Board, Chessman};
use crate::geometry;
use crate::types::{CastlingRights, CastlingSide, Color, Coord, File, Piece};

use thiserror::Error;

/// Reason why castling is not allowed
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum CastlingDenial {
    /// The right was cleared earlier in the game
    #[error("no right to castle {0:?}side")]
    NoRight(CastlingSide),
    /// King or rook are not on their home squares
    #[error("king and rook are not in castling position")]
    NotCastlingPosition,
    /// A square between the king and the rook is occupied
    #[error("path is blocked at {0}")]
    PathBlocked(Coord),
    /// The king is currently in check
    #[error("king is in check")]
    InCheck,
    /// The king passes over or lands on an attacked square
    #[error("king passes through attacked square {0}")]
    TransitAttacked(Coord),
}

/// Squares between the king and the rook, which must be empty
#[inline]
pub const fn pass(c: Color, s: CastlingSide) -> Bitboard {
    let x = match s {
        CastlingSide::King => 0x60,
        CastlingSide::Queen => 0x0e,
    };
    Bitboard::from_raw(match c {
        Color::White => x << 56,
        Color::Black => x,
    })
}

/// Squares the king crosses or lands on, which must not be attacked
#[inline]
pub const fn transit(c: Color, s: CastlingSide) -> Bitboard {
    let x = match s {
        CastlingSide::King => 0x60,
        CastlingSide::Queen => 0x0c,
    };
    Bitboard::from_raw(match c {
        Color::White => x << 56,
        Color::Black => x,
    })
}

#[inline]
pub const fn king_src(c: Color) -> Coord {
    Coord::from_parts(File::E, geometry::castling_rank(c))
}

#[inline]
pub const fn king_dst(c: Color, s: CastlingSide) -> Coord {
    let file = match s {
        CastlingSide::King => File::G,
        CastlingSide::Queen => File::C,
    };
    Coord::from_parts(file, geometry::castling_rank(c))
}

#[inline]
pub const fn rook_src(c: Color, s: CastlingSide) -> Coord {
    Coord::from_parts(geometry::rook_home_file(s), geometry::castling_rank(c))
}

#[inline]
pub const fn rook_dst(c: Color, s: CastlingSide) -> Coord {
    let file = match s {
        CastlingSide::King => File::F,
        CastlingSide::Queen => File::D,
    };
    Coord::from_parts(file, geometry::castling_rank(c))
}

/// Returns the castling side if the king of color `c` going from `src` to `dst` castles
pub fn side_of(c: Color, src: Coord, dst: Coord) -> Option<CastlingSide> {
    if src != king_src(c) {
        return None;
    }
    [CastlingSide::King, CastlingSide::Queen]
        .into_iter()
        .find(|s| dst == king_dst(c, *s))
}

/// Returns `true` if a king going from `src` to `dst` attempts to castle
///
/// This holds for every king move by exactly two files along a rank, even if the king is not on
/// its home square. Such a move is never a normal king step.
#[inline]
pub fn is_attempt(src: Coord, dst: Coord) -> bool {
    src.rank() == dst.rank() && src.file_distance(dst) == 2
}

/// Checks whether side `c` may castle to side `s` on board `b`
///
/// The checks are done in the following order: castling right, king and rook placement,
/// empty path, king not in check, king path not attacked.
pub fn check(b: &Board, c: Color, s: CastlingSide) -> Result<(), CastlingDenial> {
    if !b.state().castling.has(c, s) {
        return Err(CastlingDenial::NoRight(s));
    }

    let king_ok = b.get(king_src(c)).map_or(false, |man| man.is(c, Piece::King));
    let rook_ok = b.get(rook_src(c, s)).map_or(false, |man| man.is(c, Piece::Rook));
    if !king_ok || !rook_ok {
        return Err(CastlingDenial::NotCastlingPosition);
    }

    if let Some(blocked) = pass(c, s).into_iter().find(|sq| !b.is_free(*sq)) {
        return Err(CastlingDenial::PathBlocked(blocked));
    }

    if attack::is_square_attacked(b, king_src(c), c.inv()) {
        return Err(CastlingDenial::InCheck);
    }

    if let Some(attacked) = transit(c, s)
        .into_iter()
        .find(|sq| attack::is_square_attacked(b, *sq, c.inv()))
    {
        return Err(CastlingDenial::TransitAttacked(attacked));
    }

    Ok(())
}

/// Clears the rights lost by moving `man` from `src` to `dst`
///
/// A king move clears both rights of its color. Any move from or onto a rook home square clears
/// the right belonging to that square, so capturing a rook at home also clears the right. Rights
/// are never set here.
pub fn update_rights(rights: &mut CastlingRights, man: &Chessman, src: Coord, dst: Coord) {
    if man.piece == Piece::King {
        rights.unset_color(man.color);
    }
    for c in [Color::White, Color::Black] {
        for s in [CastlingSide::King, CastlingSide::Queen] {
            let corner = rook_src(c, s);
            if src == corner || dst == corner {
                rights.unset(c, s);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(s: &str) -> Coord {
        s.parse().unwrap()
    }

    #[test]
    fn test_squares() {
        assert_eq!(king_src(Color::White), coord("e1"));
        assert_eq!(king_dst(Color::White, CastlingSide::King), coord("g1"));
        assert_eq!(rook_src(Color::Black, CastlingSide::Queen), coord("a8"));
        assert_eq!(rook_dst(Color::Black, CastlingSide::Queen), coord("d8"));
        assert_eq!(
            pass(Color::White, CastlingSide::Queen),
            [coord("b1"), coord("c1"), coord("d1")].into_iter().collect()
        );
        assert_eq!(
            transit(Color::Black, CastlingSide::King),
            [coord("f8"), coord("g8")].into_iter().collect()
        );
        assert_eq!(
            side_of(Color::White, coord("e1"), coord("c1")),
            Some(CastlingSide::Queen)
        );
        assert_eq!(side_of(Color::White, coord("e1"), coord("f1")), None);
        assert_eq!(side_of(Color::Black, coord("e1"), coord("g1")), None);
        assert!(is_attempt(coord("d1"), coord("f1")));
        assert!(!is_attempt(coord("e1"), coord("f2")));
    }

    #[test]
    fn test_check() {
        let b = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(check(&b, Color::White, CastlingSide::King), Ok(()));
        assert_eq!(check(&b, Color::White, CastlingSide::Queen), Ok(()));

        let b = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1").unwrap();
        assert_eq!(
            check(&b, Color::White, CastlingSide::King),
            Err(CastlingDenial::NoRight(CastlingSide::King))
        );

        let b = Board::from_fen("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1").unwrap();
        assert_eq!(
            check(&b, Color::White, CastlingSide::King),
            Err(CastlingDenial::PathBlocked(coord("g1")))
        );
        assert_eq!(
            check(&b, Color::White, CastlingSide::Queen),
            Err(CastlingDenial::PathBlocked(coord("b1")))
        );

        let b = Board::from_fen("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(
            check(&b, Color::White, CastlingSide::King),
            Err(CastlingDenial::InCheck)
        );

        let b = Board::from_fen("r3k2r/8/8/8/8/8/6r1/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(
            check(&b, Color::White, CastlingSide::King),
            Err(CastlingDenial::TransitAttacked(coord("g1")))
        );
        assert_eq!(check(&b, Color::White, CastlingSide::Queen), Ok(()));

        // b1 may be attacked, the king never crosses it
        let b = Board::from_fen("r3k2r/8/8/8/8/8/1r6/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(check(&b, Color::White, CastlingSide::Queen), Ok(()));
    }

    #[test]
    fn test_update_rights() {
        let rook = |s: &str| Chessman {
            piece: Piece::Rook,
            color: Color::White,
            moved: false,
            coord: coord(s),
        };
        let mut rights = CastlingRights::FULL;
        update_rights(&mut rights, &rook("h1"), coord("h1"), coord("h5"));
        assert_eq!(rights.to_string(), "Qkq");
        update_rights(&mut rights, &rook("h5"), coord("h5"), coord("h1"));
        assert_eq!(rights.to_string(), "Qkq");
        update_rights(&mut rights, &rook("a1"), coord("a1"), coord("a8"));
        assert_eq!(rights.to_string(), "k");

        let king = Chessman {
            piece: Piece::King,
            color: Color::Black,
            moved: false,
            coord: coord("e8"),
        };
        update_rights(&mut rights, &king, coord("e8"), coord("e7"));
        assert_eq!(rights, CastlingRights::EMPTY);
    }
}
