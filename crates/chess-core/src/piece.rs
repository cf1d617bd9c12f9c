//! Chess piece representation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a piece name is not recognised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PieceError {
    #[error("unknown piece '{0}': expected one of knight, rook, queen")]
    Unknown(String),
}

/// The piece types whose moves can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Knight = 0,
    Rook = 1,
    Queen = 2,
}

impl Piece {
    /// All piece types in order.
    pub const ALL: [Piece; 3] = [Piece::Knight, Piece::Rook, Piece::Queen];

    /// Returns the lowercase name used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Piece::Knight => "knight",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
        }
    }
}

impl FromStr for Piece {
    type Err = PieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Piece::ALL
            .into_iter()
            .find(|piece| piece.name() == s)
            .ok_or_else(|| PieceError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_from_str() {
        assert_eq!("knight".parse(), Ok(Piece::Knight));
        assert_eq!("rook".parse(), Ok(Piece::Rook));
        assert_eq!("queen".parse(), Ok(Piece::Queen));
    }

    #[test]
    fn piece_from_str_is_exact() {
        assert_eq!(
            "bishop".parse::<Piece>(),
            Err(PieceError::Unknown("bishop".to_string()))
        );
        assert!("Knight".parse::<Piece>().is_err());
        assert!("".parse::<Piece>().is_err());
    }

    #[test]
    fn display_matches_name() {
        for piece in Piece::ALL {
            assert_eq!(piece.to_string().parse(), Ok(piece));
        }
    }
}
