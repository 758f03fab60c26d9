//! Pseudo-legal destinations and legal move listing
//!
//! Squares are stepped through by adding an offset to the linear index. After every step the
//! file of the new square is compared with the file of the previous one, so a move can never
//! leave the board on one edge and reappear on the other.

use crate::bitboard::Bitboard;
use crate::board::{Board, Chessman};
use crate::moves::{uci, Move, MoveKind, PromotePiece};
use crate::types::{CastlingSide, Color, Coord, Piece};
use crate::{castling, geometry, legal};

use std::convert::Infallible;
use std::ops::{Deref, DerefMut, RangeInclusive};
use std::slice;

use arrayvec::ArrayVec;

pub const KNIGHT_OFFSETS: [isize; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
pub const KING_OFFSETS: [isize; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
pub const DIAG_DIRS: [isize; 4] = [-9, -7, 7, 9];
pub const LINE_DIRS: [isize; 4] = [-8, -1, 1, 8];

const KNIGHT_FILE_DELTA: RangeInclusive<usize> = 1..=2;
const STEP_FILE_DELTA: RangeInclusive<usize> = 0..=1;

/// Adds `delta` to `src` if the file changes by an amount in `file_delta`
#[inline]
fn step(src: Coord, delta: isize, file_delta: &RangeInclusive<usize>) -> Option<Coord> {
    let dst = src.offset(delta)?;
    file_delta.contains(&src.file_distance(dst)).then_some(dst)
}

#[inline]
fn can_land(b: &Board, dst: Coord, color: Color) -> bool {
    b.color_at(dst) != Some(color)
}

fn leaper(
    b: &Board,
    src: Coord,
    color: Color,
    offsets: &[isize],
    file_delta: &RangeInclusive<usize>,
) -> Bitboard {
    offsets
        .iter()
        .filter_map(|delta| step(src, *delta, file_delta))
        .filter(|dst| can_land(b, *dst, color))
        .collect()
}

fn slider(b: &Board, src: Coord, color: Color, dirs: &[isize]) -> Bitboard {
    let mut res = Bitboard::EMPTY;
    for delta in dirs {
        let mut cur = src;
        while let Some(next) = step(cur, *delta, &STEP_FILE_DELTA) {
            match b.color_at(next) {
                None => res.set(next),
                Some(c) => {
                    if c != color {
                        res.set(next);
                    }
                    break;
                }
            }
            cur = next;
        }
    }
    res
}

/// Destinations of a pawn, split by the way the pawn gets there
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PawnMoves {
    /// Forward moves onto empty squares
    pub quiet: Bitboard,
    /// Both diagonal squares in front of the pawn, whatever stands on them
    pub attacks: Bitboard,
}

/// Returns the quiet moves and the attacked squares of pawn `man`
pub fn pawn(b: &Board, man: &Chessman) -> PawnMoves {
    let fwd = geometry::pawn_forward_delta(man.color);
    let mut res = PawnMoves::default();

    if let Some(one) = step(man.coord, fwd, &(0..=0)).filter(|c| b.is_free(*c)) {
        res.quiet.set(one);
        if !man.moved {
            if let Some(two) = step(one, fwd, &(0..=0)).filter(|c| b.is_free(*c)) {
                res.quiet.set(two);
            }
        }
    }

    for delta in [fwd - 1, fwd + 1] {
        if let Some(dst) = step(man.coord, delta, &(1..=1)) {
            res.attacks.set(dst);
        }
    }
    res
}

/// Returns pseudo-legal destinations of a non-pawn `kind` of color `color` standing on `src`
///
/// Squares with own pieces are excluded, squares with enemy pieces are included. Pawns have
/// no destinations here, use [`pawn()`] for them.
pub fn piece(b: &Board, src: Coord, color: Color, kind: Piece) -> Bitboard {
    match kind {
        Piece::Pawn => Bitboard::EMPTY,
        Piece::Knight => leaper(b, src, color, &KNIGHT_OFFSETS, &KNIGHT_FILE_DELTA),
        Piece::King => leaper(b, src, color, &KING_OFFSETS, &STEP_FILE_DELTA),
        Piece::Bishop => slider(b, src, color, &DIAG_DIRS),
        Piece::Rook => slider(b, src, color, &LINE_DIRS),
        Piece::Queen => {
            slider(b, src, color, &DIAG_DIRS) | slider(b, src, color, &LINE_DIRS)
        }
    }
}

/// Returns all pseudo-legal destinations of the man standing on `src`
///
/// Castling is not included, as a king moving two files is not a king step. For pawns, the
/// result contains the quiet moves, plus the diagonal squares holding an enemy piece or equal to
/// the en passant target.
pub fn destinations(b: &Board, src: Coord) -> Bitboard {
    let man = match b.get(src) {
        Some(man) => man,
        None => return Bitboard::EMPTY,
    };
    match man.piece {
        Piece::Pawn => {
            let moves = pawn(b, man);
            let captures = moves.attacks.into_iter().filter(|dst| {
                b.color_at(*dst) == Some(man.color.inv())
                    || (b.ep_target() == Some(*dst) && b.side() == man.color)
            });
            moves.quiet | captures.collect::<Bitboard>()
        }
        p => piece(b, src, man.color, p),
    }
}

/// Returns the squares attacked by `man`
///
/// This equals the pseudo-legal destinations, except for pawns which attack only diagonally.
pub fn attacks(b: &Board, man: &Chessman) -> Bitboard {
    match man.piece {
        Piece::Pawn => pawn(b, man).attacks,
        p => piece(b, man.coord, man.color, p),
    }
}

trait MaybeMovePush {
    type Err;

    fn push(&mut self, m: Move) -> Result<(), Self::Err>;
}

#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Move, 256>);

impl Deref for MoveList {
    type Target = ArrayVec<Move, 256>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

pub trait MovePush {
    fn push(&mut self, m: Move);
}

impl MovePush for MoveList {
    fn push(&mut self, m: Move) {
        self.0.push(m);
    }
}

impl MovePush for Vec<Move> {
    fn push(&mut self, m: Move) {
        self.push(m);
    }
}

impl<T: MovePush> MaybeMovePush for T {
    type Err = Infallible;

    fn push(&mut self, m: Move) -> Result<(), Self::Err> {
        <Self as MovePush>::push(self, m);
        Ok(())
    }
}

struct ErrOnFirst;

impl MaybeMovePush for ErrOnFirst {
    type Err = ();

    fn push(&mut self, _mv: Move) -> Result<(), ()> {
        Err(())
    }
}

/// Passes only the moves which keep the mover's king safe
struct LegalFilter<'a, P> {
    probe: Board,
    inner: &'a mut P,
}

impl<'a, P: MaybeMovePush> LegalFilter<'a, P> {
    fn new(board: &Board, inner: &'a mut P) -> Self {
        Self {
            probe: *board,
            inner,
        }
    }

    fn push_checked(&mut self, mv: Move) -> Result<(), P::Err> {
        match legal::is_safe(&mut self.probe, mv) {
            true => self.inner.push(mv),
            false => Ok(()),
        }
    }
}

fn gen_legal_impl<P: MaybeMovePush>(b: &Board, dst: &mut P) -> Result<(), P::Err> {
    let side = b.side();
    let mut filter = LegalFilter::new(b, dst);

    for man in b.men().filter(|man| man.color == side) {
        let src = man.coord;
        for to in destinations(b, src) {
            let mv = uci::Move::new(src, to, None).into_move(b);
            if mv.kind().promote().is_some() {
                for p in PromotePiece::ALL {
                    filter.push_checked(Move::new(MoveKind::from(p), src, to, side))?;
                }
            } else {
                filter.push_checked(mv)?;
            }
        }
    }

    for s in [CastlingSide::King, CastlingSide::Queen] {
        if castling::check(b, side, s).is_ok() {
            filter.inner.push(Move::from_castling(side, s))?;
        }
    }

    Ok(())
}

/// Appends all the legal moves of the side to move into `dst`
pub fn gen_legal_into<P: MovePush>(b: &Board, dst: &mut P) {
    let _ = gen_legal_impl(b, dst);
}

/// Returns all the legal moves of the side to move
pub fn gen_legal(b: &Board) -> MoveList {
    let mut res = MoveList::new();
    gen_legal_into(b, &mut res);
    res
}

/// Returns `true` if the side to move has at least one legal move
pub fn has_legal_moves(b: &Board) -> bool {
    gen_legal_impl(b, &mut ErrOnFirst).is_err()
}
