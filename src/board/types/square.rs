//! Square types and utilities.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (row, col).
///
/// Row 0 is rank 8 and row 7 is rank 1; col 0 is file a. Coordinates are
/// signed so that move generation can step off the board and test
/// [`Square::in_bounds`] afterwards. [`Square::OFF_BOARD`] stands for
/// "no square" and is what `"-"` parses to.
///
/// Equality follows the algebraic name: every out-of-bounds pair prints as
/// `"-"` and compares equal to `OFF_BOARD`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub i8, pub i8); // (row, col)

impl Square {
    /// The off-board sentinel
    pub const OFF_BOARD: Square = Square(-1, -1);

    /// Create a square without bounds checking
    #[inline]
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Square(row, col)
    }

    /// Get the row (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.0
    }

    /// Get the col (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        0 <= self.0 && self.0 <= 7 && 0 <= self.1 && self.1 <= 7
    }

    /// True for the sentinel and for any other pair outside the board
    #[inline]
    #[must_use]
    pub const fn is_off_board(self) -> bool {
        !self.in_bounds()
    }

    /// In-bounds squares unchanged, everything else folded to `OFF_BOARD`
    #[inline]
    const fn canonical(self) -> Self {
        if self.is_off_board() {
            Square::OFF_BOARD
        } else {
            self
        }
    }

    /// The square reached by stepping `(d_row, d_col)`; may be out of bounds.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Square(self.0 + d_row, self.1 + d_col)
    }

    /// Grid indices for an in-bounds square.
    #[inline]
    pub(crate) fn index(self) -> (usize, usize) {
        debug_assert!(self.in_bounds(), "index of off-board square {self:?}");
        (self.0 as usize, self.1 as usize)
    }

    /// Parse algebraic notation ("e4") or the "-" sentinel.
    pub fn from_algebraic(s: &str) -> Result<Self, SquareError> {
        s.parse()
    }

    /// Algebraic name of this square, `"-"` for anything off the board.
    #[must_use]
    pub fn algebraic(self) -> String {
        self.to_string()
    }

    /// Iterate every in-bounds square, rank 8 first, file a first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square(row, col)))
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.canonical(), other.canonical());
        a.0 == b.0 && a.1 == b.1
    }
}

impl Eq for Square {}

impl Hash for Square {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let sq = self.canonical();
        sq.0.hash(state);
        sq.1.hash(state);
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "-");
        }
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (i8, i8)) -> Result<Self, Self::Error> {
        let sq = Square(row, col);
        if sq.in_bounds() {
            Ok(sq)
        } else {
            Err(SquareError::OutOfBounds { row, col })
        }
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(Square::OFF_BOARD);
        }

        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as i8,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => 7 - (b - b'1') as i8,
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic_corners() {
        assert_eq!("a8".parse::<Square>().unwrap(), Square(0, 0));
        assert_eq!("h1".parse::<Square>().unwrap(), Square(7, 7));
        assert_eq!("a1".parse::<Square>().unwrap(), Square(7, 0));
        assert_eq!(Square(0, 7).to_string(), "h8");
        assert_eq!(Square(4, 4).to_string(), "e4");
    }

    #[test]
    fn test_dash_is_off_board() {
        let sq: Square = "-".parse().unwrap();
        assert_eq!(sq, Square::OFF_BOARD);
        assert!(!sq.in_bounds());
        assert_eq!(sq.to_string(), "-");
    }

    #[test]
    fn test_off_board_squares_compare_by_name() {
        assert_ne!(Square::OFF_BOARD, Square(0, 0));
        assert_eq!(Square::OFF_BOARD, Square::new(-1, -1));

        // Every off-board pair reads "-" and equals the sentinel
        for sq in [Square(8, 0), Square(0, -1), Square(3, 9), Square(7, 7).offset(1, 0)] {
            assert_eq!(sq.to_string(), "-");
            assert!(sq.is_off_board());
            assert_eq!(sq, Square::OFF_BOARD);
        }
        assert_ne!(Square(8, 0).offset(-1, 0), Square::OFF_BOARD);

        let set: std::collections::HashSet<Square> =
            [Square(8, 0), Square(-3, 2), Square::OFF_BOARD].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_malformed_notation_is_an_error() {
        for bad in ["", "e", "a42", "i1", "a9", "a0", "E4", "--"] {
            assert!(
                matches!(
                    bad.parse::<Square>(),
                    Err(SquareError::InvalidNotation { .. })
                ),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn test_in_bounds() {
        assert!(Square(0, 0).in_bounds());
        assert!(Square(7, 7).in_bounds());
        assert!(!Square(8, 0).in_bounds());
        assert!(!Square(0, -1).in_bounds());
    }

    #[test]
    fn test_try_from_tuple() {
        assert_eq!(Square::try_from((3, 4)).unwrap(), Square(3, 4));
        assert!(matches!(
            Square::try_from((8, 0)),
            Err(SquareError::OutOfBounds { row: 8, col: 0 })
        ));
    }

    #[test]
    fn test_all_squares() {
        let all: Vec<Square> = Square::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0].to_string(), "a8");
        assert_eq!(all[63].to_string(), "h1");
    }
}
