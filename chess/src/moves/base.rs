use super::uci;
use crate::board::Board;
use crate::castling;
use crate::types::{CastlingSide, Color, Coord, Piece};

use std::fmt;

/// Move kind
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    /// Non-pawn move or capture (except castling)
    Simple = 1,
    /// Kingside castling
    CastlingKingside = 2,
    /// Queenside castling
    CastlingQueenside = 3,
    /// Single pawn move (either non-capture or capture)
    PawnSimple = 4,
    /// Double pawn move
    PawnDouble = 5,
    /// Enpassant
    Enpassant = 6,
    /// Pawn promote to knight (either non-capture or capture)
    PromoteKnight = 7,
    /// Pawn promote to bishop (either non-capture or capture)
    PromoteBishop = 8,
    /// Pawn promote to rook (either non-capture or capture)
    PromoteRook = 9,
    /// Pawn promote to queen (either non-capture or capture)
    PromoteQueen = 10,
}

/// Target piece for promotion
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotePiece {
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
}

impl PromotePiece {
    pub const ALL: [PromotePiece; 4] = [
        PromotePiece::Knight,
        PromotePiece::Bishop,
        PromotePiece::Rook,
        PromotePiece::Queen,
    ];

    /// Returns the lower-case letter used in coordinate notation
    pub fn as_char(&self) -> char {
        match *self {
            PromotePiece::Knight => 'n',
            PromotePiece::Bishop => 'b',
            PromotePiece::Rook => 'r',
            PromotePiece::Queen => 'q',
        }
    }

    /// Parses the promote letter, ignoring case
    pub fn from_char(c: char) -> Option<PromotePiece> {
        Piece::from_char(c)?.try_into().ok()
    }
}

impl From<PromotePiece> for Piece {
    #[inline]
    fn from(p: PromotePiece) -> Self {
        match p {
            PromotePiece::Knight => Piece::Knight,
            PromotePiece::Bishop => Piece::Bishop,
            PromotePiece::Rook => Piece::Rook,
            PromotePiece::Queen => Piece::Queen,
        }
    }
}

impl TryFrom<Piece> for PromotePiece {
    type Error = ();

    #[inline]
    fn try_from(p: Piece) -> Result<Self, Self::Error> {
        match p {
            Piece::Knight => Ok(PromotePiece::Knight),
            Piece::Bishop => Ok(PromotePiece::Bishop),
            Piece::Rook => Ok(PromotePiece::Rook),
            Piece::Queen => Ok(PromotePiece::Queen),
            _ => Err(()),
        }
    }
}

impl From<CastlingSide> for MoveKind {
    #[inline]
    fn from(side: CastlingSide) -> Self {
        match side {
            CastlingSide::King => Self::CastlingKingside,
            CastlingSide::Queen => Self::CastlingQueenside,
        }
    }
}

impl TryFrom<MoveKind> for CastlingSide {
    type Error = ();

    #[inline]
    fn try_from(kind: MoveKind) -> Result<Self, Self::Error> {
        match kind {
            MoveKind::CastlingKingside => Ok(Self::King),
            MoveKind::CastlingQueenside => Ok(Self::Queen),
            _ => Err(()),
        }
    }
}

impl From<PromotePiece> for MoveKind {
    #[inline]
    fn from(kind: PromotePiece) -> Self {
        match kind {
            PromotePiece::Knight => Self::PromoteKnight,
            PromotePiece::Bishop => Self::PromoteBishop,
            PromotePiece::Rook => Self::PromoteRook,
            PromotePiece::Queen => Self::PromoteQueen,
        }
    }
}

impl TryFrom<MoveKind> for PromotePiece {
    type Error = ();

    #[inline]
    fn try_from(kind: MoveKind) -> Result<Self, Self::Error> {
        match kind {
            MoveKind::PromoteKnight => Ok(Self::Knight),
            MoveKind::PromoteBishop => Ok(Self::Bishop),
            MoveKind::PromoteRook => Ok(Self::Rook),
            MoveKind::PromoteQueen => Ok(Self::Queen),
            _ => Err(()),
        }
    }
}

impl MoveKind {
    /// Returns the piece after promote if this move kind represents a promote
    ///
    /// Otherwise, returns `None`.
    #[inline]
    pub fn promote(self) -> Option<Piece> {
        let piece: PromotePiece = self.try_into().ok()?;
        Some(piece.into())
    }

    #[inline]
    pub fn is_castling(self) -> bool {
        matches!(self, Self::CastlingKingside | Self::CastlingQueenside)
    }

    #[inline]
    pub fn is_pawn(self) -> bool {
        matches!(
            self,
            Self::PawnSimple
                | Self::PawnDouble
                | Self::Enpassant
                | Self::PromoteKnight
                | Self::PromoteBishop
                | Self::PromoteRook
                | Self::PromoteQueen
        )
    }
}

/// Chess move
///
/// Represents a classified chess move made by a given side. A move is only classified, not
/// checked: use [`validate()`](crate::validate::validate) to learn whether it may be played
/// in a given position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    kind: MoveKind,
    src: Coord,
    dst: Coord,
    side: Color,
}

impl Move {
    /// Creates a move from its raw parts
    #[inline]
    pub const fn new(kind: MoveKind, src: Coord, dst: Coord, side: Color) -> Move {
        Move {
            kind,
            src,
            dst,
            side,
        }
    }

    /// Creates a castling move made by `color` with side `side`
    #[inline]
    pub fn from_castling(color: Color, side: CastlingSide) -> Move {
        Move {
            kind: MoveKind::from(side),
            src: castling::king_src(color),
            dst: castling::king_dst(color, side),
            side: color,
        }
    }

    /// Classifies the coordinate notation move `s` in position `b`
    ///
    /// The returned move is **not** guaranteed to be legal.
    #[inline]
    pub fn from_uci(s: &str, b: &Board) -> Result<Move, uci::RawParseError> {
        Ok(s.parse::<uci::Move>()?.into_move(b))
    }

    #[inline]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn src(&self) -> Coord {
        self.src
    }

    #[inline]
    pub const fn dst(&self) -> Coord {
        self.dst
    }

    #[inline]
    pub const fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn promote(&self) -> Option<PromotePiece> {
        self.kind.try_into().ok()
    }

    /// Converts the move into its coordinate notation form
    #[inline]
    pub fn uci(&self) -> uci::Move {
        (*self).into()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.uci())
    }
}
