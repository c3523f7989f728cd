//! Move pickers that drive a [`Game`](crate::game::Game).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, MiniMax, Move};

/// Anything that can pick a move for the side to move.
///
/// Implementations read the board but never change it. Returning `None`
/// means the player has nothing to offer; for a position with legal moves
/// that is treated as an error by the game loop.
pub trait Player {
    fn choose_move(&mut self, board: &Board) -> Option<Move>;
}

/// Picks uniformly among the legal moves.
pub struct RandomPlayer<R = StdRng> {
    rng: R,
}

impl RandomPlayer<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomPlayer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPlayer<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomPlayer { rng }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        board
            .all_legal_moves()
            .as_slice()
            .choose(&mut self.rng)
            .copied()
    }
}

impl<R: Rng> Player for MiniMax<R> {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        (**self).choose_move(board)
    }
}
