//! Core types for chess move geometry.
//!
//! This crate provides the fundamental types used by move generation:
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Board`] for the bounds squares must fall within
//! - [`Piece`] for the supported piece types
//! - [`to_coordinates`] and [`to_algebraic`] for notation translation

mod board;
mod notation;
mod piece;
mod square;

pub use board::{Board, BoardError};
pub use notation::{to_algebraic, to_coordinates};
pub use piece::{Piece, PieceError};
pub use square::{File, Rank, Square, SquareError};
