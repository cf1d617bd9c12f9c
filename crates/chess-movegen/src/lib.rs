//! Single-step move generation for knights, rooks, and queens.
//!
//! This crate provides:
//! - [`MovePattern`] - the contract every piece's movement rule implements
//! - [`KnightMoves`], [`RookMoves`], [`QueenMoves`] - one pattern per piece
//! - [`generate_moves`] - dispatch from a [`Piece`](chess_core::Piece) to its pattern
//! - [`SquareList`] - the ordered, allocation-free result and its printed form
//!
//! The board is empty: there are no other pieces, captures, or checks, only
//! the geometry of each move within the board's bounds.
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, Piece, Square};
//! use chess_movegen::generate_moves;
//!
//! let from: Square = "a1".parse().unwrap();
//! let moves = generate_moves(Board::STANDARD, Piece::Knight, from).unwrap();
//! assert_eq!(moves.to_string(), "b3, c2");
//! ```

mod list;
pub mod movegen;

pub use list::{SquareList, SEPARATOR};
pub use movegen::{
    generate_moves, pattern_for, KnightMoves, MoveGenError, MovePattern, QueenMoves, RookMoves,
    DIAGONALS, KNIGHT_OFFSETS,
};
