//! Rule state that travels with the position

use crate::types::{CastlingRights, Color, Coord};

/// Side to move, castling flags, en passant target and move counters
///
/// The state is a plain value owned by the [`Board`](crate::board::Board) it describes. There is
/// no process-wide copy of any of these fields, so independent games never interfere.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Side to move
    pub side: Color,
    /// Castling rights
    ///
    /// Rights are only ever cleared during the game, never restored.
    pub castling: CastlingRights,
    /// Square passed over by a pawn that has just made a double move
    ///
    /// Valid only for the reply immediately following the double move.
    pub ep_target: Option<Coord>,
    /// Number of half-moves since the last capture or pawn move
    pub halfmove_clock: u16,
    /// Move number, incremented after each move by Black
    pub fullmove_number: u16,
}

impl GameState {
    /// State of a fresh game: White to move, all castling rights present
    pub const fn initial() -> GameState {
        GameState {
            side: Color::White,
            castling: CastlingRights::FULL,
            ep_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// State with no castling rights, White to move
    pub const fn empty() -> GameState {
        GameState {
            castling: CastlingRights::EMPTY,
            ..GameState::initial()
        }
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::initial()
    }
}
