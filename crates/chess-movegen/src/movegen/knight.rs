//! Knight moves.

use chess_core::{Board, Piece, Square};

use super::{signed_coords, MovePattern};
use crate::SquareList;

/// Knight jumps as `(dx, dy)`, in the order destinations are reported.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// Jumps one of the eight L-shaped offsets, keeping those that land on the
/// board.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnightMoves;

impl MovePattern for KnightMoves {
    fn piece(&self) -> Piece {
        Piece::Knight
    }

    fn destinations(&self, board: Board, from: Square) -> SquareList {
        let (x, y) = signed_coords(from);
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| board.square_at(x + dx, y + dy))
            .collect()
    }
}
