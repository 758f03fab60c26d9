//! # relaychess
//!
//! Chess rules engine for games driven by move suggestions in coordinate notation.
//!
//! The engine keeps the authoritative board, generates pseudo-legal moves, checks king safety
//! by simulating a move and restoring the board, validates externally suggested moves and
//! renders positions as FEN.
//!
//! # Example
//!
//! ```
//! use relaychess::{Board, MoveChain, Outcome};
//!
//! let mut chain = MoveChain::new_initial();
//! chain.push_suggestion("Let's go with f2f3").unwrap();
//! chain.push_suggestion("e7e5, grabbing the center").unwrap();
//! chain.push_suggestion("g2g4?").unwrap();
//! chain.push_suggestion("D8H4 and it's over").unwrap();
//!
//! assert_eq!(
//!     chain.fen(),
//!     "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
//! );
//! assert!(matches!(chain.outcome(), Some(Outcome::Win { .. })));
//! assert!(chain.last().is_checkmate(chain.last().side()));
//! assert_ne!(chain.last(), &Board::initial());
//! ```

pub mod attack;
pub mod board;
pub mod castling;
pub mod chain;
pub mod enpassant;
pub mod fen;
pub mod legal;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod state;
pub mod validate;

pub use relaychess_base::{bitboard, geometry, types};

pub use bitboard::Bitboard;
pub use board::{Board, RawBoard};
pub use chain::MoveChain;
pub use movegen::MoveList;
pub use moves::{make_move_unchecked, Move, MoveKind, PromotePiece};
pub use state::GameState;
pub use types::{
    CastlingRights, CastlingSide, Cell, Color, Coord, DrawReason, File, Outcome, Piece, Rank,
    WinReason,
};
pub use validate::{Config, MoveError, Policy};
