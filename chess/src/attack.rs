//! Attack detection by scanning the whole board
//!
//! Every man of the attacking color is asked for its attacked squares, which costs a full board
//! scan per query. Queries happen once per candidate move, never inside a search.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::movegen;
use crate::types::{Color, Coord};

/// Returns `true` if square `coord` is attacked by some man of color `by`
pub fn is_square_attacked(b: &Board, coord: Coord, by: Color) -> bool {
    b.men()
        .filter(|man| man.color == by)
        .any(|man| movegen::attacks(b, man).has(coord))
}

/// Returns the squares of all the men of color `by` attacking `coord`
pub fn attackers(b: &Board, coord: Coord, by: Color) -> Bitboard {
    b.men()
        .filter(|man| man.color == by && movegen::attacks(b, man).has(coord))
        .map(|man| man.coord)
        .collect()
}
