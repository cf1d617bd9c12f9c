//! Board dimensions.
//!
//! The board holds no pieces. It only bounds the coordinates that move
//! generation may produce, and is built once and passed around by value.

use thiserror::Error;

use crate::{File, Rank, Square};

/// Errors that can occur when building a board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}: each side must be between 1 and 8")]
    InvalidDimensions { width: u8, height: u8 },
}

/// A rectangular board of `width` files by `height` ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
}

impl Board {
    /// Largest supported side, bounded by the eight file letters.
    pub const MAX_SIDE: u8 = 8;

    /// The standard 8x8 chess board.
    pub const STANDARD: Board = Board {
        width: 8,
        height: 8,
    };

    /// Creates a board of the given size.
    pub const fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        if width == 0 || height == 0 || width > Self::MAX_SIDE || height > Self::MAX_SIDE {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Board { width, height })
    }

    /// Number of files.
    #[inline]
    pub const fn width(self) -> u8 {
        self.width
    }

    /// Number of ranks.
    #[inline]
    pub const fn height(self) -> u8 {
        self.height
    }

    /// Returns true if `(x, y)` lies on this board.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Returns true if the square lies on this board.
    #[inline]
    pub const fn contains_square(self, sq: Square) -> bool {
        sq.x() < self.width && sq.y() < self.height
    }

    /// Returns the square at `(x, y)`, or `None` if it is off this board.
    pub fn square_at(self, x: i32, y: i32) -> Option<Square> {
        if !self.contains(x, y) {
            return None;
        }
        let file = File::from_index(u8::try_from(x).ok()?)?;
        let rank = Rank::from_index(u8::try_from(y).ok()?)?;
        Some(Square::new(file, rank))
    }

    /// Iterates over every square, file by file: a1, a2, ..., b1, b2, ...
    pub fn squares(self) -> impl Iterator<Item = Square> {
        let height = self.height as usize;
        File::ALL
            .into_iter()
            .take(self.width as usize)
            .flat_map(move |file| {
                Rank::ALL
                    .into_iter()
                    .take(height)
                    .map(move |rank| Square::new(file, rank))
            })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board() {
        let board = Board::default();
        assert_eq!(board, Board::STANDARD);
        assert_eq!((board.width(), board.height()), (8, 8));
        assert_eq!(board.squares().count(), 64);
    }

    #[test]
    fn new_rejects_bad_dimensions() {
        assert_eq!(
            Board::new(0, 8),
            Err(BoardError::InvalidDimensions {
                width: 0,
                height: 8
            })
        );
        assert_eq!(
            Board::new(8, 9),
            Err(BoardError::InvalidDimensions {
                width: 8,
                height: 9
            })
        );
        assert_eq!(Board::new(8, 8), Ok(Board::STANDARD));
    }

    #[test]
    fn contains_checks_each_axis() {
        let board = Board::new(5, 3).unwrap();
        assert!(board.contains(0, 0));
        assert!(board.contains(4, 2));
        assert!(!board.contains(5, 0));
        assert!(!board.contains(0, 3));
        assert!(!board.contains(-1, 0));
        assert!(!board.contains(0, -1));
    }

    #[test]
    fn square_at() {
        let board = Board::STANDARD;
        assert_eq!(board.square_at(0, 0), Some(Square::A1));
        assert_eq!(board.square_at(7, 7), Some(Square::H8));
        assert_eq!(board.square_at(8, 0), None);
        assert_eq!(board.square_at(0, -1), None);

        let narrow = Board::new(2, 8).unwrap();
        assert_eq!(narrow.square_at(2, 0), None);
        assert!(!narrow.contains_square(Square::H1));
        assert!(narrow.contains_square(Square::A8));
    }

    #[test]
    fn squares_are_file_major() {
        let names: Vec<String> = Board::new(2, 3)
            .unwrap()
            .squares()
            .map(Square::to_algebraic)
            .collect();
        assert_eq!(names, ["a1", "a2", "a3", "b1", "b2", "b3"]);
    }
}
