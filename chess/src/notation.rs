//! Extraction of coordinate notation moves from free text
//!
//! Suggestions come as arbitrary prose, like `"I'd play e7e5, it keeps the center"`. The first
//! token of the form `[a-h][1-8][a-h][1-8][qrbn]?`, matched case-insensitively, is the move.

use crate::moves::uci;

use thiserror::Error;

/// No coordinate notation move was found in the text
///
/// The caller should ask for another suggestion instead of guessing a move.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("no move found in {text:?}")]
pub struct NotFound {
    pub text: String,
}

#[inline]
fn is_file(b: u8) -> bool {
    matches!(b, b'a'..=b'h')
}

#[inline]
fn is_rank(b: u8) -> bool {
    matches!(b, b'1'..=b'8')
}

#[inline]
fn is_promote(b: u8) -> bool {
    matches!(b, b'q' | b'r' | b'b' | b'n')
}

fn matches_at(bytes: &[u8], pos: usize) -> Option<usize> {
    let w = bytes.get(pos..pos + 4)?;
    if !(is_file(w[0]) && is_rank(w[1]) && is_file(w[2]) && is_rank(w[3])) {
        return None;
    }
    match bytes.get(pos + 4) {
        Some(&b) if is_promote(b) => Some(5),
        _ => Some(4),
    }
}

/// Returns the first move token in `text`, lower-cased
///
/// # Example
///
/// ```
/// # use relaychess::notation;
/// #
/// assert_eq!(notation::extract("e7e5 castling, king safety.").unwrap(), "e7e5");
/// assert_eq!(notation::extract("Promote with B7B8Q!").unwrap(), "b7b8q");
/// assert!(notation::extract("resign").is_err());
/// ```
pub fn extract(text: &str) -> Result<String, NotFound> {
    let lower = text.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    (0..bytes.len())
        .find_map(|pos| matches_at(bytes, pos).map(|len| &lower[pos..pos + len]))
        .map(str::to_string)
        .ok_or_else(|| NotFound {
            text: text.to_string(),
        })
}

/// Same as [`extract()`], but also parses the token
pub fn extract_move(text: &str) -> Result<uci::Move, NotFound> {
    let token = extract(text)?;
    token.parse().map_err(|_| NotFound {
        text: text.to_string(),
    })
}
