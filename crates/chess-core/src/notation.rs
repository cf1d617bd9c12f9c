//! Translation between algebraic notation and zero-based coordinates.
//!
//! `x` is the file index (a = 0) and `y` is the rank minus one, so "d2" is
//! `(3, 1)`. Both directions reject anything off the 8x8 board.

use crate::{Square, SquareError};

/// Converts a square name such as "d2" into `(x, y)` coordinates.
pub fn to_coordinates(square: &str) -> Result<(u8, u8), SquareError> {
    Square::from_algebraic(square).map(Square::coords)
}

/// Converts `(x, y)` coordinates into a square name such as "d2".
pub fn to_algebraic(x: u8, y: u8) -> Result<String, SquareError> {
    Square::from_coords(x, y).map(Square::to_algebraic)
}
