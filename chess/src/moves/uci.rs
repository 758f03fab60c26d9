//! Utilities to work with moves in coordinate notation
//!
//! A move is written as the source square, the destination square and an optional promote
//! letter, like `e2e4` or `a7a8q`. Input is case-insensitive, output is always lower-case.

use super::base::{self, MoveKind, PromotePiece};
use crate::board::Board;
use crate::types::{Coord, CoordParseError, Piece};
use crate::{castling, geometry};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a move in coordinate notation
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum RawParseError {
    /// Bad string length
    #[error("bad string length")]
    BadLength,
    /// Bad source square
    #[error("bad source: {0}")]
    BadSrc(CoordParseError),
    /// Bad destination square
    #[error("bad destination: {0}")]
    BadDst(CoordParseError),
    /// Bad promote character
    #[error("bad promote char {0:?}")]
    BadPromote(char),
}

/// Parsed move in coordinate notation
///
/// This is the external form of a move: it knows nothing about the position it is played in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    /// Source square
    pub src: Coord,
    /// Destination square
    pub dst: Coord,
    /// Piece to promote, if any
    pub promote: Option<PromotePiece>,
}

impl Move {
    #[inline]
    pub const fn new(src: Coord, dst: Coord, promote: Option<PromotePiece>) -> Move {
        Move { src, dst, promote }
    }

    /// Classifies the move in position `b`
    ///
    /// The side to move is taken as the mover. A pawn reaching the last rank without a promote
    /// letter is classified as a queen promote.
    pub fn into_move(self, b: &Board) -> base::Move {
        let side = b.side();
        let Move { src, dst, promote } = self;
        let man = b.get(src).filter(|man| man.color == side);
        let kind = match man.map(|man| man.piece) {
            Some(Piece::Pawn) => {
                if dst.rank() == geometry::promote_rank(side) {
                    MoveKind::from(promote.unwrap_or(PromotePiece::Queen))
                } else if src.rank_distance(dst) == 2 {
                    MoveKind::PawnDouble
                } else if src.file() != dst.file() && b.ep_target() == Some(dst) && b.is_free(dst)
                {
                    MoveKind::Enpassant
                } else {
                    MoveKind::PawnSimple
                }
            }
            Some(Piece::King) => match castling::side_of(side, src, dst) {
                Some(cs) => MoveKind::from(cs),
                None => MoveKind::Simple,
            },
            _ => MoveKind::Simple,
        };
        base::Move::new(kind, src, dst, side)
    }
}

impl From<base::Move> for Move {
    #[inline]
    fn from(mv: base::Move) -> Move {
        Move {
            src: mv.src(),
            dst: mv.dst(),
            promote: mv.promote(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)?;
        if let Some(p) = self.promote {
            write!(f, "{}", p.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = RawParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        if !s.is_ascii() || !matches!(s.len(), 4 | 5) {
            return Err(RawParseError::BadLength);
        }
        let s = s.to_ascii_lowercase();
        let src = Coord::from_str(&s[0..2]).map_err(RawParseError::BadSrc)?;
        let dst = Coord::from_str(&s[2..4]).map_err(RawParseError::BadDst)?;
        let promote = match s.as_bytes().get(4) {
            Some(&b) => Some(
                PromotePiece::from_char(b as char).ok_or(RawParseError::BadPromote(b as char))?,
            ),
            None => None,
        };
        Ok(Move { src, dst, promote })
    }
}
