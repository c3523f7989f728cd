//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `Piece`, `Color` and `PlacedPiece` - piece kinds, colors, occupied cells
//! - `Square` - (row, col) coordinates with an off-board sentinel
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter, ScoredMove};
pub use piece::{Color, Piece, PlacedPiece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use castling::{king_home, rook_home};
pub(crate) use piece::PROMOTION_PIECES;
