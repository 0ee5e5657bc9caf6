use std::error::Error;
use std::fmt;

use crate::board::MAX_DIMENSION;

/// Reasons a tile grid cannot become a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// No board was supplied at all (empty grid, empty file).
    Empty,
    TooSmall { dimension: usize },
    TooLarge { dimension: usize },
    /// A row whose length differs from the number of rows.
    Ragged { row: usize, len: usize, expected: usize },
    TileOutOfRange { tile: u64, max: usize },
    DuplicateTile { tile: u16 },
    /// The text format declared `expected` tiles but carried `found`.
    TileCount { expected: usize, found: usize },
    Parse { token: String },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::Empty => write!(f, "No puzzle provided"),
            PuzzleError::TooSmall { dimension } => {
                write!(f, "Board dimension {} is too small, must be at least 2", dimension)
            }
            PuzzleError::TooLarge { dimension } => write!(
                f,
                "Board dimension {} is too large, must be at most {}",
                dimension, MAX_DIMENSION
            ),
            PuzzleError::Ragged { row, len, expected } => write!(
                f,
                "Row {} has {} tiles, expected {} for a square board",
                row, len, expected
            ),
            PuzzleError::TileOutOfRange { tile, max } => {
                write!(f, "Tile {} is out of range, tiles must be between 0 and {}", tile, max)
            }
            PuzzleError::DuplicateTile { tile } => write!(f, "Tile {} appears more than once", tile),
            PuzzleError::TileCount { expected, found } => {
                write!(f, "Expected {} tiles, found {}", expected, found)
            }
            PuzzleError::Parse { token } => write!(f, "Could not parse '{}' as a tile", token),
        }
    }
}

impl Error for PuzzleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = PuzzleError::Ragged { row: 2, len: 2, expected: 3 };
        assert_eq!(err.to_string(), "Row 2 has 2 tiles, expected 3 for a square board");

        let err = PuzzleError::Parse { token: "x".into() };
        assert!(err.to_string().contains("'x'"));
    }
}
