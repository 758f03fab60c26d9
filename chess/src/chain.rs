//! Driving a single game from start to finish
//!
//! [`MoveChain`] owns the current board together with the history of played moves. Suggestions
//! come in as free text, pass through [`notation`], [`validate`] and the move executor, and the
//! chain keeps track of the outcome.

use crate::board::Board;
use crate::fen::FenParseError;
use crate::moves::{self, uci, Move};
use crate::notation::{self, NotFound};
use crate::types::Outcome;
use crate::validate::{self, Config, MoveError};

use std::fmt;

use log::{info, trace};
use thiserror::Error;

/// Error applying a move to [`MoveChain`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// The game already has an outcome
    #[error("game is finished: {0}")]
    Finished(Outcome),
    /// The move token is malformed
    #[error("bad move: {0}")]
    Parse(#[from] uci::RawParseError),
    /// The suggestion contains no move
    #[error(transparent)]
    NotFound(#[from] NotFound),
    /// The move is not allowed in the current position
    #[error("move rejected: {0}")]
    Rejected(#[from] MoveError),
}

/// Error applying a space-separated list of moves
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot apply move #{}: {}", .pos + 1, .source)]
pub struct UciListError {
    pub pos: usize,
    pub source: TurnError,
}

/// Game in progress
///
/// One chain drives one game. It is not meant to be shared between games or threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveChain {
    board: Board,
    config: Config,
    stack: Vec<(Move, Board)>,
    outcome: Option<Outcome>,
}

impl MoveChain {
    pub fn new(b: Board) -> Self {
        Self::with_config(b, Config::default())
    }

    pub fn with_config(b: Board, config: Config) -> Self {
        MoveChain {
            board: b,
            config,
            stack: Vec::new(),
            outcome: None,
        }
    }

    pub fn new_initial() -> Self {
        Self::new(Board::initial())
    }

    pub fn from_fen(s: &str) -> Result<Self, FenParseError> {
        Ok(Self::new(Board::from_fen(s)?))
    }

    pub fn from_uci_list(b: Board, uci_list: &str) -> Result<Self, UciListError> {
        let mut res = Self::new(b);
        res.push_uci_list(uci_list)?;
        Ok(res)
    }

    /// Returns the current board
    pub fn last(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().map(|(m, _)| *m)
    }

    pub fn get(&self, idx: usize) -> Option<Move> {
        self.stack.get(idx).map(|(m, _)| *m)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Renders the current position as FEN
    pub fn fen(&self) -> String {
        self.board.as_fen()
    }

    /// Checks `mv` against the current position without applying it
    pub fn validate(&self, mv: uci::Move) -> Result<Move, TurnError> {
        if let Some(outcome) = self.outcome {
            return Err(TurnError::Finished(outcome));
        }
        Ok(validate::validate(&self.board, mv, &self.config)?)
    }

    fn do_push(&mut self, mv: Move) {
        let prev = self.board;
        moves::make_move_unchecked(&mut self.board, mv);
        self.stack.push((mv, prev));
        trace!("played {}, now {}", mv, self.board.as_fen());

        if let Some(outcome) = self.board.calc_outcome().filter(Outcome::is_force) {
            info!("game finished after {} moves: {}", self.stack.len(), outcome);
            self.outcome = Some(outcome);
        }
    }

    /// Validates and plays `mv`
    pub fn push(&mut self, mv: Move) -> Result<(), TurnError> {
        let mv = self.validate(mv.uci())?;
        self.do_push(mv);
        Ok(())
    }

    /// Plays a move given as a strict coordinate notation token, like `e2e4` or `a7a8q`
    pub fn push_uci(&mut self, s: &str) -> Result<Move, TurnError> {
        let mv = self.validate(s.parse()?)?;
        self.do_push(mv);
        Ok(mv)
    }

    /// Finds the first move in free text `text` and plays it
    ///
    /// On error nothing changes, and the caller may ask for another suggestion.
    pub fn push_suggestion(&mut self, text: &str) -> Result<Move, TurnError> {
        let mv = self.validate(notation::extract_move(text)?)?;
        self.do_push(mv);
        Ok(mv)
    }

    /// Plays space-separated coordinate notation moves
    ///
    /// Moves before the failing one stay applied.
    pub fn push_uci_list(&mut self, uci_list: &str) -> Result<(), UciListError> {
        for (pos, token) in uci_list.split_ascii_whitespace().enumerate() {
            self.push_uci(token)
                .map_err(|source| UciListError { pos, source })?;
        }
        Ok(())
    }

    /// Takes back the last move, clearing the outcome
    pub fn pop(&mut self) -> Option<Move> {
        let (m, prev) = self.stack.pop()?;
        self.board = prev;
        self.outcome = None;
        Some(m)
    }

    pub fn uci_list(&self) -> UciList<'_> {
        UciList(self)
    }
}

impl Default for MoveChain {
    fn default() -> Self {
        Self::new_initial()
    }
}

/// Played moves, formatted as space-separated coordinate notation
pub struct UciList<'a>(&'a MoveChain);

impl<'a> fmt::Display for UciList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for (i, m) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}
