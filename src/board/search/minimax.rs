use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{SearchResult, MATE_SCORE};
use crate::board::{Board, Color, Move, ScoredMove};

/// Searches every legal line to a fixed depth and picks the best material outcome.
///
/// `depth` counts the plies explored below each root move, so depth 0 scores
/// the positions right after each candidate. The maximizing side is whoever
/// is on move at the root, whatever the depth's parity.
pub struct MiniMax<R = StdRng> {
    depth: usize,
    rng: R,
}

impl MiniMax<StdRng> {
    /// Search to `depth` with an entropy-seeded tie-breaker.
    pub fn new(depth: usize) -> Self {
        Self::with_rng(depth, StdRng::from_entropy())
    }

    /// Reproducible search: the same seed breaks ties the same way.
    pub fn with_seed(depth: usize, seed: u64) -> Self {
        Self::with_rng(depth, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MiniMax<R> {
    pub fn with_rng(depth: usize, rng: R) -> Self {
        MiniMax { depth, rng }
    }

    /// Score every legal move for the side to move and pick a best one.
    ///
    /// Candidates are shuffled before the maximum is taken, so ties are
    /// broken uniformly at random.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        let color = board.side_to_move();
        let mut nodes = 0;

        let mut scored: Vec<ScoredMove> = board
            .all_legal_moves()
            .into_iter()
            .map(|mv| {
                let mut child = board.clone();
                child.play_unchecked(mv);
                ScoredMove {
                    mv,
                    score: minimax(&child, color, self.depth, &mut nodes),
                }
            })
            .collect();
        scored.shuffle(&mut self.rng);

        let result = match scored.iter().max_by_key(|s| s.score) {
            Some(best) => SearchResult {
                best_move: Some(best.mv),
                score: best.score,
                nodes,
            },
            None => SearchResult {
                best_move: None,
                score: if board.check(color) { -MATE_SCORE } else { 0 },
                nodes,
            },
        };

        match result.best_move {
            Some(mv) => log::debug!(
                "{color} depth {}: {mv} score {} nodes {}",
                self.depth,
                result.score,
                result.nodes
            ),
            None => log::debug!("{color} has no legal move"),
        }
        result
    }

    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }
}

/// Score `board` for `color`, looking `depth` more plies ahead.
fn minimax(board: &Board, color: Color, depth: usize, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if board.has_winner() {
        return if board.checkmate(color) {
            -MATE_SCORE
        } else {
            MATE_SCORE
        };
    }
    let moves = board.all_legal_moves();
    if moves.is_empty() {
        return 0;
    }
    if depth == 0 {
        return board.evaluate(color);
    }

    let scores = moves.into_iter().map(|mv| {
        let mut child = board.clone();
        child.play_unchecked(mv);
        minimax(&child, color, depth - 1, nodes)
    });
    let best = if board.side_to_move() == color {
        scores.max()
    } else {
        scores.min()
    };
    best.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count_depth_zero() {
        let result = MiniMax::with_seed(0, 1).search(&Board::new());
        assert_eq!(result.nodes, 20);
        assert_eq!(result.score, 0);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_no_moves_when_mated() {
        let board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        let result = MiniMax::with_seed(1, 7).search(&board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -MATE_SCORE);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let a = MiniMax::with_seed(0, 42).choose_move(&board);
        let b = MiniMax::with_seed(0, 42).choose_move(&board);
        assert_eq!(a, b);
    }
}
