//! Queen moves.

use chess_core::{Board, Piece, Square};

use super::{ray, MovePattern, RookMoves};
use crate::SquareList;

/// Diagonal directions as `(dx, dy)`, in the order their rays are reported.
pub const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Slides along both diagonals, followed by everything a rook reaches.
///
/// Each diagonal ray is bounded by the board width on the x axis and the
/// height on the y axis, so rectangular boards are handled per axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueenMoves;

impl MovePattern for QueenMoves {
    fn piece(&self) -> Piece {
        Piece::Queen
    }

    fn destinations(&self, board: Board, from: Square) -> SquareList {
        let mut list: SquareList = DIAGONALS
            .iter()
            .flat_map(|&dir| ray(board, from, dir))
            .collect();
        list.extend(RookMoves.destinations(board, from).iter().copied());
        list
    }
}
