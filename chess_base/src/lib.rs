//! # Base types for relaychess
//!
//! This is an auxiliary crate for `relaychess`, which contains plain value types: squares,
//! colors, pieces, castling flags and square sets. It holds no chess rules.
//!
//! Normally you don't want to use this crate directly. Use `relaychess` instead.

pub mod bitboard;
pub mod geometry;
pub mod types;
