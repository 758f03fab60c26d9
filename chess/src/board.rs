//! Board and related things

use crate::moves::{self, Move};
use crate::movegen::{self, MoveList};
use crate::state::GameState;
use crate::types::{
    CastlingSide, Cell, Color, Coord, DrawReason, File, Outcome, Piece, Rank, WinReason,
};
use crate::validate::{self, MoveError};
use crate::{attack, enpassant, fen, geometry};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Maximum number of men on the board, sixteen per side
pub const MAX_MEN: usize = 32;

/// Board validation error
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum LayoutError {
    /// Too many pieces of given color
    ///
    /// No more than 16 pieces of each color is allowed.
    #[error("too many pieces of color {0:?}")]
    TooManyPieces(Color),
    /// One of the sides doesn't have a king
    #[error("no king of color {0:?}")]
    NoKing(Color),
    /// One of the sides has more than one king
    #[error("more than one king of color {0:?}")]
    TooManyKings(Color),
    /// There is a pawn on the 1th or on the 8th rank
    #[error("invalid pawn position {0}")]
    InvalidPawn(Coord),
    /// The side which is not to move is in check
    #[error("opponent's king is attacked")]
    OpponentKingAttacked,
}

/// Unvalidated position
///
/// Raw board is the editable form of a position: cells are plain values and nothing is checked.
/// It is used to build custom layouts and as the intermediate result of FEN parsing. Convert it
/// into [`Board`] via [`Board::try_from()`] to play on it.
///
/// # Example
///
/// ```
/// # use relaychess::{RawBoard, Board, File, Rank, Color, Piece, Cell};
/// #
/// let mut raw = RawBoard::empty();
/// raw.put2(File::B, Rank::R2, Cell::from_parts(Color::White, Piece::King));
/// raw.put2(File::D, Rank::R5, Cell::from_parts(Color::Black, Piece::King));
/// raw.state.halfmove_clock = 10;
/// raw.state.fullmove_number = 42;
///
/// let board: Board = raw.try_into().unwrap();
/// assert_eq!(board.as_fen(), "8/8/8/3k4/8/8/1K6/8 w - - 10 42");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RawBoard {
    /// Contents of the board, indexed by [`Coord::index()`]
    pub cells: [Cell; 64],
    /// Side to move, castling rights, en passant target and counters
    pub state: GameState,
}

impl RawBoard {
    /// Returns a board without pieces
    pub const fn empty() -> RawBoard {
        RawBoard {
            cells: [Cell::EMPTY; 64],
            state: GameState::empty(),
        }
    }

    /// Returns a board with the initial position
    pub fn initial() -> RawBoard {
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        let mut res = RawBoard {
            cells: [Cell::EMPTY; 64],
            state: GameState::initial(),
        };
        for color in [Color::White, Color::Black] {
            let back = geometry::castling_rank(color);
            let pawns = geometry::pawn_home_rank(color);
            for (file, piece) in File::iter().zip(BACK_RANK) {
                res.put2(file, back, Cell::from_parts(color, piece));
                res.put2(file, pawns, Cell::from_parts(color, Piece::Pawn));
            }
        }
        res
    }

    /// Parses a board from FEN
    #[inline]
    pub fn from_fen(s: &str) -> Result<RawBoard, fen::RawFenParseError> {
        RawBoard::from_str(s)
    }

    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.cells[c.index()]
    }

    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Coord::from_parts(file, rank))
    }

    #[inline]
    pub fn put(&mut self, c: Coord, cell: Cell) {
        self.cells[c.index()] = cell;
    }

    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, cell: Cell) {
        self.put(Coord::from_parts(file, rank), cell);
    }

    /// Converts the board into a FEN string
    #[inline]
    pub fn as_fen(&self) -> String {
        self.to_string()
    }

    /// Clears castling flags and en passant target which contradict the layout
    fn sanitize(&mut self) {
        for color in [Color::White, Color::Black] {
            let rank = geometry::castling_rank(color);
            if self.get2(File::E, rank) != Cell::from_parts(color, Piece::King) {
                self.state.castling.unset_color(color);
            }
            for side in [CastlingSide::King, CastlingSide::Queen] {
                if self.get2(geometry::rook_home_file(side), rank)
                    != Cell::from_parts(color, Piece::Rook)
                {
                    self.state.castling.unset(color, side);
                }
            }
        }

        if let Some(target) = self.state.ep_target {
            if !enpassant::is_plausible_target(self, target) {
                self.state.ep_target = None;
            }
        }
    }
}

impl Default for RawBoard {
    #[inline]
    fn default() -> RawBoard {
        RawBoard::empty()
    }
}

/// Index of a man in the board's piece table
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ManId(u8);

impl ManId {
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Piece standing on the board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Chessman {
    pub piece: Piece,
    pub color: Color,
    /// Whether the man has moved since the game started
    ///
    /// Pawns may only make a double move while this is `false`.
    pub moved: bool,
    /// Square the man stands on
    pub coord: Coord,
}

impl Chessman {
    #[inline]
    pub const fn cell(&self) -> Cell {
        Cell::from_parts(self.color, self.piece)
    }

    #[inline]
    pub fn is(&self, color: Color, piece: Piece) -> bool {
        self.color == color && self.piece == piece
    }
}

/// Board that contains a valid position
///
/// The board owns a table of [`Chessman`] records and 64 squares which refer to the records by
/// [`ManId`]. After every completed operation, each man on the board is referenced by exactly
/// the square stored in its [`Chessman::coord`].
///
/// The board is `Copy`, so taking a snapshot before an experiment is cheap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<ManId>; 64],
    men: [Option<Chessman>; MAX_MEN],
    pub(crate) state: GameState,
}

impl Board {
    /// Returns a board with the initial position
    pub fn initial() -> Board {
        Board::assemble(&RawBoard::initial())
    }

    /// Parses a board from FEN
    pub fn from_fen(s: &str) -> Result<Board, fen::FenParseError> {
        Board::from_str(s)
    }

    /// Builds the piece table from cells, inferring the `moved` flags
    ///
    /// Cells beyond [`MAX_MEN`] occupied squares are ignored, so the caller must check the piece
    /// count first.
    fn assemble(raw: &RawBoard) -> Board {
        let mut res = Board {
            squares: [None; 64],
            men: [None; MAX_MEN],
            state: raw.state,
        };
        let occupied = Coord::iter().filter_map(|coord| {
            let cell = raw.get(coord);
            Some((coord, cell.color()?, cell.piece()?))
        });
        for (slot, (coord, color, piece)) in occupied.take(MAX_MEN).enumerate() {
            let moved = !is_at_home(coord, color, piece, &raw.state);
            res.men[slot] = Some(Chessman {
                piece,
                color,
                moved,
                coord,
            });
            res.squares[coord.index()] = Some(ManId(slot as u8));
        }
        res
    }

    /// Returns the position as an unvalidated raw board
    pub fn raw(&self) -> RawBoard {
        let mut cells = [Cell::EMPTY; 64];
        for coord in Coord::iter() {
            cells[coord.index()] = self.cell(coord);
        }
        RawBoard {
            cells,
            state: self.state,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns side to move
    #[inline]
    pub fn side(&self) -> Color {
        self.state.side
    }

    #[inline]
    pub fn ep_target(&self) -> Option<Coord> {
        self.state.ep_target
    }

    #[inline]
    pub fn man_id(&self, c: Coord) -> Option<ManId> {
        self.squares[c.index()]
    }

    #[inline]
    pub fn man(&self, id: ManId) -> Option<&Chessman> {
        self.men[id.index()].as_ref()
    }

    /// Returns the man standing on `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Option<&Chessman> {
        self.man(self.man_id(c)?)
    }

    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Option<&Chessman> {
        self.get(Coord::from_parts(file, rank))
    }

    #[inline]
    pub fn cell(&self, c: Coord) -> Cell {
        self.get(c).map_or(Cell::EMPTY, Chessman::cell)
    }

    #[inline]
    pub fn color_at(&self, c: Coord) -> Option<Color> {
        self.get(c).map(|man| man.color)
    }

    #[inline]
    pub fn is_free(&self, c: Coord) -> bool {
        self.squares[c.index()].is_none()
    }

    /// Iterates over all the men on the board, from a8 to h1
    pub fn men(&self) -> impl Iterator<Item = &Chessman> + '_ {
        self.squares
            .iter()
            .filter_map(move |id| self.man((*id)?))
    }

    /// Returns the position of the king of color `c`
    ///
    /// Boards built through [`Board::try_from()`] always have both kings, but a game validated
    /// with [`Policy::SemiLegal`](crate::validate::Policy::SemiLegal) may lose one.
    pub fn king_pos(&self, c: Color) -> Option<Coord> {
        self.men()
            .find(|man| man.is(c, Piece::King))
            .map(|man| man.coord)
    }

    /// Returns `true` if the king of color `c` is attacked
    pub fn is_check(&self, c: Color) -> bool {
        self.king_pos(c)
            .map_or(false, |king| attack::is_square_attacked(self, king, c.inv()))
    }

    /// Returns `true` if the side to move is in check
    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.is_check(self.state.side)
    }

    /// Returns `true` if the king of the side which is not to move is attacked
    #[inline]
    pub fn is_opponent_king_attacked(&self) -> bool {
        self.is_check(self.state.side.inv())
    }

    /// Returns all the legal moves of the side to move
    #[inline]
    pub fn legal_moves(&self) -> MoveList {
        movegen::gen_legal(self)
    }

    /// Returns `true` if the current side has at least one legal move
    #[inline]
    pub fn has_legal_moves(&self) -> bool {
        movegen::has_legal_moves(self)
    }

    /// Returns `true` if `mv` does not leave the mover's king attacked
    ///
    /// The move is tried on a private snapshot; `self` is never modified.
    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        crate::legal::is_legal(self, mv)
    }

    /// Returns `true` if side `c` is in check and has no legal move
    pub fn is_checkmate(&self, c: Color) -> bool {
        self.is_check(c) && !self.to_move(c).has_legal_moves()
    }

    /// Returns `true` if side `c` is not in check but has no legal move
    pub fn is_stalemate(&self, c: Color) -> bool {
        !self.is_check(c) && !self.to_move(c).has_legal_moves()
    }

    /// Returns a copy where `c` is to move
    ///
    /// If the side changes, the en passant target is dropped, as it belongs to the other side.
    fn to_move(&self, c: Color) -> Board {
        let mut res = *self;
        if res.state.side != c {
            res.state.side = c;
            res.state.ep_target = None;
        }
        res
    }

    /// Calculates the current outcome on the board
    ///
    /// A missing king of the side to move means it was captured. Checkmate and stalemate take
    /// precedence over the draws by move counter.
    pub fn calc_outcome(&self) -> Option<Outcome> {
        if self.king_pos(self.state.side).is_none() {
            return Some(Outcome::Win {
                side: self.state.side.inv(),
                reason: WinReason::KingCaptured,
            });
        }

        if !self.has_legal_moves() {
            return if self.is_in_check() {
                Some(Outcome::Win {
                    side: self.state.side.inv(),
                    reason: WinReason::Checkmate,
                })
            } else {
                Some(Outcome::Draw(DrawReason::Stalemate))
            };
        }

        if self.state.halfmove_clock >= 150 {
            return Some(Outcome::Draw(DrawReason::Moves75));
        }
        if self.state.halfmove_clock >= 100 {
            return Some(Outcome::Draw(DrawReason::Moves50));
        }

        None
    }

    /// Validates `mv` with full king safety and returns the board after it
    pub fn make_move(&self, mv: Move) -> Result<Board, MoveError> {
        let mv = validate::validate(self, mv.uci(), &validate::Config::default())?;
        let mut res = *self;
        moves::make_move_unchecked(&mut res, mv);
        Ok(res)
    }

    /// Returns `true` if every man on the board is referenced by its cached square and
    /// every occupied square refers to a live man standing on it
    pub fn is_consistent(&self) -> bool {
        let squares_ok = Coord::iter().all(|coord| match self.man_id(coord) {
            Some(id) => self.man(id).map_or(false, |man| man.coord == coord),
            None => true,
        });
        let men_ok = self.men.iter().enumerate().all(|(idx, man)| match man {
            Some(man) => self.man_id(man.coord) == Some(ManId(idx as u8)),
            None => true,
        });
        squares_ok && men_ok
    }

    /// Wraps the board to allow pretty-printing
    ///
    /// # Example
    ///
    /// ```
    /// # use relaychess::Board;
    /// #
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    /// W|abcdefgh
    /// "#;
    /// assert_eq!(Board::initial().pretty().to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty(self)
    }

    /// Converts the board into a FEN string
    #[inline]
    pub fn as_fen(&self) -> String {
        fen::encode(self)
    }

    pub(crate) fn man_mut(&mut self, id: ManId) -> Option<&mut Chessman> {
        self.men[id.index()].as_mut()
    }

    /// Sets the square reference without touching the man's cached square
    pub(crate) fn set_square(&mut self, c: Coord, id: Option<ManId>) {
        self.squares[c.index()] = id;
    }

    /// Takes the man off the board, freeing its slot
    pub(crate) fn remove(&mut self, c: Coord) -> Option<Chessman> {
        let id = self.squares[c.index()].take()?;
        self.men[id.index()].take()
    }

    /// Moves the man from `src` to `dst`, marking it as moved
    ///
    /// `dst` must be empty.
    pub(crate) fn relocate(&mut self, src: Coord, dst: Coord) -> Option<ManId> {
        let id = self.squares[src.index()].take()?;
        self.squares[dst.index()] = Some(id);
        if let Some(man) = self.man_mut(id) {
            man.coord = dst;
            man.moved = true;
        }
        Some(id)
    }
}

fn is_at_home(coord: Coord, color: Color, piece: Piece, state: &GameState) -> bool {
    let back = geometry::castling_rank(color);
    match piece {
        Piece::Pawn => coord.rank() == geometry::pawn_home_rank(color),
        Piece::King => {
            coord == Coord::from_parts(File::E, back) && state.castling.has_color(color)
        }
        Piece::Rook => [CastlingSide::King, CastlingSide::Queen]
            .into_iter()
            .any(|side| {
                coord == Coord::from_parts(geometry::rook_home_file(side), back)
                    && state.castling.has(color, side)
            }),
        Piece::Knight | Piece::Bishop | Piece::Queen => true,
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = LayoutError;

    fn try_from(mut raw: RawBoard) -> Result<Board, LayoutError> {
        raw.sanitize();

        for color in [Color::White, Color::Black] {
            let ours = || raw.cells.iter().filter(|cell| cell.color() == Some(color));
            if ours().count() > MAX_MEN / 2 {
                return Err(LayoutError::TooManyPieces(color));
            }
            let king = Cell::from_parts(color, Piece::King);
            match ours().filter(|cell| **cell == king).count() {
                0 => return Err(LayoutError::NoKing(color)),
                1 => {}
                _ => return Err(LayoutError::TooManyKings(color)),
            }
        }

        if let Some(coord) = Coord::iter().find(|coord| {
            raw.get(*coord).piece() == Some(Piece::Pawn)
                && matches!(coord.rank(), Rank::R1 | Rank::R8)
        }) {
            return Err(LayoutError::InvalidPawn(coord));
        }

        let res = Board::assemble(&raw);
        if res.is_opponent_king_attacked() {
            return Err(LayoutError::OpponentKingAttacked);
        }
        Ok(res)
    }
}

impl TryFrom<&RawBoard> for Board {
    type Error = LayoutError;

    fn try_from(raw: &RawBoard) -> Result<Board, LayoutError> {
        (*raw).try_into()
    }
}

impl FromStr for Board {
    type Err = fen::FenParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        Ok(RawBoard::from_str(s)?.try_into()?)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_fen())
    }
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a>(&'a Board);

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            write!(f, "{}|", rank)?;
            for file in File::iter() {
                write!(f, "{}", self.0.cell(Coord::from_parts(file, rank)))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "-+--------")?;
        let indicator = match self.0.side() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}|", indicator)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CastlingRights;

    #[test]
    fn test_initial() {
        const INI_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

        assert_eq!(RawBoard::initial().to_string(), INI_FEN);
        assert_eq!(Board::initial().to_string(), INI_FEN);
        assert_eq!(RawBoard::from_str(INI_FEN), Ok(RawBoard::initial()));
        assert_eq!(Board::from_str(INI_FEN), Ok(Board::initial()));
        assert!(Board::initial().is_consistent());
        assert_eq!(Board::initial().men().count(), 32);
        assert!(Board::initial().men().all(|man| !man.moved));
    }

    #[test]
    fn test_midgame() {
        const FEN: &str = "1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K w - - 1 21";

        let board = Board::from_fen(FEN).unwrap();
        assert_eq!(board.as_fen(), FEN);
        assert_eq!(
            board.cell(Coord::from_parts(File::B, Rank::R4)),
            Cell::from_parts(Color::Black, Piece::Bishop)
        );
        assert_eq!(
            board.get2(File::F, Rank::R2).map(Chessman::cell),
            Some(Cell::from_parts(Color::White, Piece::Queen))
        );
        assert_eq!(
            board.king_pos(Color::White),
            Some(Coord::from_parts(File::H, Rank::R1))
        );
        assert_eq!(
            board.king_pos(Color::Black),
            Some(Coord::from_parts(File::G, Rank::R8))
        );
        assert_eq!(board.side(), Color::White);
        assert_eq!(board.state().castling, CastlingRights::EMPTY);
        assert_eq!(board.ep_target(), None);
        assert_eq!(board.state().halfmove_clock, 1);
        assert_eq!(board.state().fullmove_number, 21);
        assert_eq!(Board::try_from(board.raw()), Ok(board));
    }

    #[test]
    fn test_moved_flags() {
        let board = Board::from_fen("r3k2r/1p6/8/8/8/8/P7/R3K2R w Kq - 0 1").unwrap();
        let moved = |s: &str| board.get(Coord::from_str(s).unwrap()).unwrap().moved;
        assert!(!moved("a2"));
        assert!(!moved("b7"));
        assert!(!moved("e1"));
        assert!(!moved("h1"));
        assert!(moved("a1"));
        assert!(!moved("a8"));
        assert!(moved("h8"));
        assert!(!moved("e8"));
    }

    #[test]
    fn test_fixes() {
        const FEN: &str = "r1bq1b1r/ppppkppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK1R1 w KQkq c6 6 5";

        let raw = RawBoard::from_fen(FEN).unwrap();
        assert_eq!(raw.state.castling, CastlingRights::FULL);
        assert_eq!(raw.state.ep_target, Some(Coord::from_parts(File::C, Rank::R6)));
        assert_eq!(raw.as_fen(), FEN);

        let board: Board = raw.try_into().unwrap();
        assert_eq!(
            board.state().castling,
            CastlingRights::EMPTY.with(Color::White, CastlingSide::Queen)
        );
        assert_eq!(board.ep_target(), None);
        assert_eq!(
            board.as_fen(),
            "r1bq1b1r/ppppkppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK1R1 w Q - 6 5"
        );
    }

    #[test]
    fn test_invalid_layouts() {
        assert_eq!(
            Board::try_from(RawBoard::empty()),
            Err(LayoutError::NoKing(Color::White))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"),
            Err(fen::FenParseError::Layout(LayoutError::TooManyKings(
                Color::White
            )))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/P3K3 w - - 0 1"),
            Err(fen::FenParseError::Layout(LayoutError::InvalidPawn(
                Coord::from_parts(File::A, Rank::R1)
            )))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4R2K w - - 0 1"),
            Err(fen::FenParseError::Layout(LayoutError::OpponentKingAttacked))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/NNNNNNNN/PPPPPPPP/1NNNK3 w - - 0 1"),
            Err(fen::FenParseError::Layout(LayoutError::TooManyPieces(
                Color::White
            )))
        );
    }

    #[test]
    fn test_outcome() {
        let b = Board::initial();
        assert_eq!(b.calc_outcome(), None);

        let b = Board::from_fen("rn1q1bnr/ppp1kB1p/3p2p1/3NN3/4P3/8/PPPP1PPP/R1BbK2R b KQ - 2 7")
            .unwrap();
        assert!(!b.has_legal_moves());
        assert!(b.is_checkmate(Color::Black));
        assert!(!b.is_checkmate(Color::White));
        assert_eq!(
            b.calc_outcome(),
            Some(Outcome::Win {
                side: Color::White,
                reason: WinReason::Checkmate
            })
        );

        let b = Board::from_fen("7K/8/5n2/5n2/8/8/7k/8 w - - 0 1").unwrap();
        assert!(!b.has_legal_moves());
        assert!(b.is_stalemate(Color::White));
        assert_eq!(b.calc_outcome(), Some(Outcome::Draw(DrawReason::Stalemate)));

        let b = Board::from_fen("NNK4k/8/8/8/8/8/8/8 w - - 99 80").unwrap();
        assert_eq!(b.calc_outcome(), None);

        let b = Board::from_fen("NNK4k/8/8/8/8/8/8/8 w - - 100 80").unwrap();
        assert_eq!(b.calc_outcome(), Some(Outcome::Draw(DrawReason::Moves50)));

        let b = Board::from_fen("NNK4k/8/8/8/8/8/8/8 w - - 150 90").unwrap();
        assert_eq!(b.calc_outcome(), Some(Outcome::Draw(DrawReason::Moves75)));
    }

    #[test]
    fn test_raw_roundtrip_keeps_state() {
        let b = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3").unwrap();
        let raw = b.raw();
        assert_eq!(raw.state.ep_target, Some(Coord::from_parts(File::D, Rank::R6)));
        assert_eq!(Board::try_from(raw), Ok(b));
    }
}
