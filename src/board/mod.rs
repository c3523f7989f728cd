//! Chess board representation and game logic.
//!
//! The board is an 8x8 grid of optional pieces plus the FEN bookkeeping
//! fields. Move generation is pseudo-legal per piece kind, filtered into legal
//! moves by playing each candidate on a copy of the board. Supports the full
//! rules including castling, en passant and promotion.
//!
//! # Example
//! ```
//! use minimax_chess::board::{Board, Square};
//!
//! let mut board = Board::new();
//! assert_eq!(board.all_legal_moves().len(), 20);
//!
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! board.apply_move(e2, e4).unwrap();
//! assert_eq!(
//!     board.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

mod display;
mod error;
mod eval;
mod fen;
mod make_move;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, IllegalMoveError, InvariantError, MoveParseError, SquareError};
pub use search::{MiniMax, SearchResult, MATE_SCORE};
pub use state::{Board, INITIAL_FEN};
pub use types::{
    CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, PlacedPiece, ScoredMove,
    Square,
};

pub(crate) use types::{king_home, rook_home, PROMOTION_PIECES};
