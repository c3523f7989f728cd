//! Fixed-depth minimax over legal moves.
//!
//! Features:
//! - Exhaustive search to a configured depth (no pruning, no move ordering)
//! - Material evaluation at the leaves
//! - Mate and stalemate scored before evaluation
//! - Seedable random tie-breaking among equally scored root moves

mod minimax;

pub use minimax::MiniMax;

use super::Move;

/// Score of a position where the searching side has delivered mate
pub const MATE_SCORE: i32 = 10_000;

/// Outcome of one root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move, `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of the chosen move from the mover's point of view
    pub score: i32,
    /// Positions visited below the root
    pub nodes: u64,
}
