mod base;
mod make;

pub mod uci;

pub use base::*;
pub use make::make_move_unchecked;

pub type UciMove = uci::Move;
