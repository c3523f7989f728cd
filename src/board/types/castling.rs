//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask.
///
/// The empty set is a real value ("-" in FEN), not a placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every right in `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: CastlingRights) -> bool {
        self.0 & !other.0 == 0
    }

    /// Revoke whichever right depends on a rook standing on `sq`.
    pub(crate) fn revoke_rook_home(&mut self, sq: Square) {
        for color in Color::BOTH {
            for kingside in [true, false] {
                if sq == rook_home(color, kingside) {
                    self.remove(color, kingside);
                }
            }
        }
    }

    /// Parse the FEN castling field character
    pub(crate) fn bit_for_char(c: char) -> Option<u8> {
        match c {
            'K' => Some(CASTLE_WHITE_K),
            'Q' => Some(CASTLE_WHITE_Q),
            'k' => Some(CASTLE_BLACK_K),
            'q' => Some(CASTLE_BLACK_Q),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn insert_bits(&mut self, bits: u8) {
        self.0 |= bits;
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Home square of the king of `color` (e1 / e8)
pub(crate) const fn king_home(color: Color) -> Square {
    Square(color.back_row(), 4)
}

/// Home square of the rook of `color` on the given wing
pub(crate) const fn rook_home(color: Color, kingside: bool) -> Square {
    Square(color.back_row(), if kingside { 7 } else { 0 })
}
