//! Validation of moves coming from outside
//!
//! A move proposed by an external collaborator carries only the source square, the destination
//! square and an optional promote letter. [`validate()`] checks it against the position and
//! returns a classified [`Move`] ready to be applied.

use crate::board::Board;
use crate::castling::{self, CastlingDenial};
use crate::moves::{uci, Move, PromotePiece};
use crate::types::{CastlingSide, Coord, Piece};
use crate::{geometry, legal, movegen};

use log::debug;
use thiserror::Error;

/// Reason for rejecting a move
///
/// A rejected move never changes the board.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// The source square is empty
    #[error("no piece at {0}")]
    NoPieceAtOrigin(Coord),
    /// The piece on the source square belongs to the side which is not to move
    #[error("piece at {0} belongs to the opponent")]
    WrongSidePiece(Coord),
    /// The piece cannot reach the destination square
    #[error("piece cannot move to {0}")]
    IllegalDestination(Coord),
    /// The move leaves the mover's king attacked
    #[error("move leaves the king in check")]
    SelfCheckViolation,
    /// The move is a castling attempt which is not allowed
    #[error("castling denied: {0}")]
    CastlingDenied(#[from] CastlingDenial),
    /// A promote letter is given for a move which doesn't promote
    #[error("move cannot promote")]
    InvalidPromotion,
}

/// How strictly external moves are checked
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Accept every pseudo-legal move, even if it leaves the king attacked
    SemiLegal,
    /// Accept only moves which keep the king safe
    #[default]
    Legal,
}

/// Validation settings
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    pub policy: Policy,
    /// Piece used when a pawn reaches the last rank and no promote letter is given
    pub default_promotion: PromotePiece,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            policy: Policy::Legal,
            default_promotion: PromotePiece::Queen,
        }
    }
}

fn do_validate(b: &Board, mv: uci::Move, config: &Config) -> Result<Move, MoveError> {
    let side = b.side();
    let man = b.get(mv.src).ok_or(MoveError::NoPieceAtOrigin(mv.src))?;
    if man.color != side {
        return Err(MoveError::WrongSidePiece(mv.src));
    }

    if man.piece == Piece::King && castling::is_attempt(mv.src, mv.dst) {
        if mv.promote.is_some() {
            return Err(MoveError::InvalidPromotion);
        }
        let cs = if mv.dst.file() > mv.src.file() {
            CastlingSide::King
        } else {
            CastlingSide::Queen
        };
        castling::check(b, side, cs)?;
        let res = Move::from_castling(side, cs);
        if (res.src(), res.dst()) != (mv.src, mv.dst) {
            return Err(CastlingDenial::NotCastlingPosition.into());
        }
        return Ok(res);
    }

    if !movegen::destinations(b, mv.src).has(mv.dst) {
        return Err(MoveError::IllegalDestination(mv.dst));
    }

    let promoting = man.piece == Piece::Pawn && mv.dst.rank() == geometry::promote_rank(side);
    let promote = match (promoting, mv.promote) {
        (true, p) => Some(p.unwrap_or(config.default_promotion)),
        (false, None) => None,
        (false, Some(_)) => return Err(MoveError::InvalidPromotion),
    };
    let res = uci::Move::new(mv.src, mv.dst, promote).into_move(b);

    if config.policy == Policy::Legal && !legal::is_legal(b, res) {
        return Err(MoveError::SelfCheckViolation);
    }
    Ok(res)
}

/// Checks the external move `mv` in position `b`
///
/// The checks go in order: a piece of the side to move stands on the source square; a king
/// moving two files along a rank is a castling attempt and is checked by [`castling::check()`];
/// otherwise the destination must be pseudo-legal, the promote letter must match the move and,
/// with [`Policy::Legal`], the king must stay safe.
pub fn validate(b: &Board, mv: uci::Move, config: &Config) -> Result<Move, MoveError> {
    do_validate(b, mv, config).map_err(|e| {
        debug!("rejected move {} in {}: {}", mv, b.as_fen(), e);
        e
    })
}
