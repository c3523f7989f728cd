//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use minimax_chess::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, CastlingRights, Color, FenError, IllegalMoveError, MiniMax, Move, MoveList,
    MoveParseError, Piece, PlacedPiece, Square, SquareError,
};
