//! Argument handling and validation.

use chess_core::{Board, Piece, PieceError, Square, SquareError};
use chess_movegen::{generate_moves, MoveGenError, SquareList};
use clap::Parser;
use thiserror::Error;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "chess-moves")]
#[command(about = "Lists the squares a piece can reach in one move on an empty board")]
pub struct Args {
    /// Piece to move: knight, rook, or queen
    #[arg(long)]
    pub piece: String,

    /// Starting square in algebraic notation, e.g. e4
    #[arg(long)]
    pub position: String,
}

/// Errors reported to the user. The display text is printed verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Position coordinate incorrect")]
    Position(#[source] SquareError),

    #[error("Incorrect input for type of piece")]
    Piece(#[source] PieceError),

    #[error(transparent)]
    MoveGen(#[from] MoveGenError),
}

/// Validates the arguments and generates the destinations.
///
/// The position length is checked first, then the piece name, then the
/// square itself, so a bad position is reported before an unknown piece.
pub fn run(args: &Args) -> Result<SquareList, CliError> {
    let length = args.position.chars().count();
    if length != 2 {
        tracing::warn!(position = %args.position, "position must be 2 characters, got {}", length);
        return Err(CliError::Position(SquareError::InvalidLength(length)));
    }

    let piece: Piece = args.piece.parse().map_err(|e: PieceError| {
        tracing::warn!("{}", e);
        CliError::Piece(e)
    })?;

    let from: Square = args.position.parse().map_err(|e: SquareError| {
        tracing::warn!("{}", e);
        CliError::Position(e)
    })?;

    tracing::debug!(%piece, %from, "generating moves");
    let moves = generate_moves(Board::STANDARD, piece, from)?;
    tracing::debug!(count = moves.len(), "generated moves");

    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(piece: &str, position: &str) -> Args {
        Args::try_parse_from(["chess-moves", "--piece", piece, "--position", position]).unwrap()
    }

    #[test]
    fn knight_output() {
        let moves = run(&args("knight", "g4")).unwrap();
        assert_eq!(moves.to_string(), "h6, h2, f6, f2, e5, e3");
    }

    #[test]
    fn rook_output() {
        let moves = run(&args("rook", "e4")).unwrap();
        assert_eq!(
            moves.to_string(),
            "a4, b4, c4, d4, f4, g4, h4, e1, e2, e3, e5, e6, e7, e8"
        );
    }

    #[test]
    fn queen_output() {
        let moves = run(&args("queen", "g5")).unwrap();
        assert_eq!(
            moves.to_string(),
            "h6, h4, f6, e7, d8, f4, e3, d2, c1, a5, b5, c5, d5, e5, f5, h5, g1, g2, g3, g4, g6, g7, g8"
        );
    }

    #[test]
    fn wrong_length_is_checked_before_piece() {
        let err = run(&args("bishop", "e10")).unwrap_err();
        assert_eq!(err, CliError::Position(SquareError::InvalidLength(3)));
        assert_eq!(err.to_string(), "Position coordinate incorrect");
    }

    #[test]
    fn unknown_piece() {
        let err = run(&args("bishop", "e4")).unwrap_err();
        assert_eq!(
            err,
            CliError::Piece(PieceError::Unknown("bishop".to_string()))
        );
        assert_eq!(err.to_string(), "Incorrect input for type of piece");
    }

    #[test]
    fn unparseable_square() {
        for position in ["z4", "e0", "e9", "4e"] {
            let err = run(&args("rook", position)).unwrap_err();
            assert!(matches!(err, CliError::Position(_)), "{position}");
            assert_eq!(err.to_string(), "Position coordinate incorrect");
        }
    }

    #[test]
    fn both_arguments_are_required() {
        assert!(Args::try_parse_from(["chess-moves", "--piece", "rook"]).is_err());
        assert!(Args::try_parse_from(["chess-moves", "--position", "e4"]).is_err());
    }
}
