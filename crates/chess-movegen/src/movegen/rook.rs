//! Rook moves.

use chess_core::{Board, Piece, Square};

use super::{signed_coords, MovePattern};
use crate::SquareList;

/// Slides along the origin's rank and file.
///
/// Destinations are reported in four runs: along the rank from the a-file
/// up to the origin, then past it to the board edge, then along the file from
/// the first rank up to the origin, then past it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RookMoves;

impl MovePattern for RookMoves {
    fn piece(&self) -> Piece {
        Piece::Rook
    }

    fn destinations(&self, board: Board, from: Square) -> SquareList {
        let (x, y) = signed_coords(from);
        let along_rank = (0..i32::from(board.width()))
            .filter(|&i| i != x)
            .filter_map(|i| board.square_at(i, y));
        let along_file = (0..i32::from(board.height()))
            .filter(|&j| j != y)
            .filter_map(|j| board.square_at(x, j));
        along_rank.chain(along_file).collect()
    }
}
