//! Move generation.
//!
//! Each piece type implements [`MovePattern`]. Patterns are pure: the result
//! depends only on the board dimensions and the origin square, so the same
//! pattern can be shared freely between threads.

mod knight;
mod queen;
mod rook;

pub use knight::{KnightMoves, KNIGHT_OFFSETS};
pub use queen::{QueenMoves, DIAGONALS};
pub use rook::RookMoves;

use chess_core::{Board, Piece, Square};
use thiserror::Error;

use crate::SquareList;

/// Errors that can occur when generating moves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveGenError {
    #[error("square {square} is outside the {width}x{height} board")]
    OffBoard { square: Square, width: u8, height: u8 },
}

/// The movement rule of one piece type on an empty board.
pub trait MovePattern {
    /// The piece this pattern moves.
    fn piece(&self) -> Piece;

    /// Returns every square reachable in one move from `from`, in a fixed
    /// order. `from` must lie on `board`.
    fn destinations(&self, board: Board, from: Square) -> SquareList;
}

/// Returns the movement pattern for the given piece.
pub fn pattern_for(piece: Piece) -> &'static dyn MovePattern {
    match piece {
        Piece::Knight => &KnightMoves,
        Piece::Rook => &RookMoves,
        Piece::Queen => &QueenMoves,
    }
}

/// Generates the destinations of `piece` standing on `from`.
///
/// Fails only if `from` does not lie on `board`; an accepted query always
/// yields a list, which may in principle be empty.
pub fn generate_moves(
    board: Board,
    piece: Piece,
    from: Square,
) -> Result<SquareList, MoveGenError> {
    if !board.contains_square(from) {
        return Err(MoveGenError::OffBoard {
            square: from,
            width: board.width(),
            height: board.height(),
        });
    }
    Ok(pattern_for(piece).destinations(board, from))
}

/// Returns the signed coordinates of a square for offset arithmetic.
#[inline]
fn signed_coords(sq: Square) -> (i32, i32) {
    (i32::from(sq.x()), i32::from(sq.y()))
}

/// Walks from `from` one step of `(dx, dy)` at a time until leaving the board.
/// The origin itself is not included.
fn ray(board: Board, from: Square, (dx, dy): (i32, i32)) -> impl Iterator<Item = Square> {
    let (x, y) = signed_coords(from);
    (1..).map_while(move |step| board.square_at(x + dx * step, y + dy * step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{File, Rank};
    use pretty_assertions::assert_eq;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn pattern_for_matches_piece() {
        for piece in Piece::ALL {
            assert_eq!(pattern_for(piece).piece(), piece);
        }
    }

    #[test]
    fn generate_moves_dispatches() {
        let board = Board::STANDARD;
        let knight = generate_moves(board, Piece::Knight, Square::A1).unwrap();
        assert_eq!(knight.to_string(), "b3, c2");

        let rook = generate_moves(board, Piece::Rook, sq("e4")).unwrap();
        assert_eq!(rook.len(), 14);

        let queen = generate_moves(board, Piece::Queen, sq("g5")).unwrap();
        assert_eq!(queen.len(), 23);
    }

    #[test]
    fn generate_moves_rejects_off_board_origin() {
        let board = Board::new(4, 4).unwrap();
        let from = Square::new(File::E, Rank::R1);
        assert_eq!(
            generate_moves(board, Piece::Rook, from),
            Err(MoveGenError::OffBoard {
                square: from,
                width: 4,
                height: 4
            })
        );
    }

    #[test]
    fn ray_stops_at_edge() {
        let up_right: Vec<Square> = ray(Board::STANDARD, sq("f6"), (1, 1)).collect();
        assert_eq!(up_right, vec![sq("g7"), sq("h8")]);
        assert_eq!(ray(Board::STANDARD, Square::H8, (1, 1)).count(), 0);
        assert_eq!(ray(Board::STANDARD, Square::A1, (0, 1)).count(), 7);
    }
}
