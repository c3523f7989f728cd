//! Game driver: alternates two players on an owned board until the game ends.

use std::fmt;

use crate::board::{Board, Color, IllegalMoveError, Move};
use crate::player::Player;

/// Halfmove clock value at which the fifty-move rule ends the game
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    /// Stopped by the configured ply cap
    PlyLimit,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            GameOutcome::Stalemate => write!(f, "draw by stalemate"),
            GameOutcome::FiftyMoveRule => write!(f, "draw by the fifty-move rule"),
            GameOutcome::PlyLimit => write!(f, "stopped at the ply limit"),
        }
    }
}

/// A player broke the game loop's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The player offered nothing although legal moves exist
    NoMove { color: Color },
    /// The player's move was rejected by the board
    IllegalMove {
        color: Color,
        mv: Move,
        source: IllegalMoveError,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoMove { color } => write!(f, "{color} returned no move"),
            GameError::IllegalMove { color, mv, source } => {
                write!(f, "{color} played {mv}: {source}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove { source, .. } => Some(source),
            GameError::NoMove { .. } => None,
        }
    }
}

pub struct Game<W, B> {
    board: Board,
    white: W,
    black: B,
    max_plies: Option<usize>,
    moves: Vec<Move>,
}

impl<W: Player, B: Player> Game<W, B> {
    /// A game from the initial position.
    pub fn new(white: W, black: B) -> Self {
        Self::from_board(Board::new(), white, black)
    }

    /// A game continuing from `board`.
    pub fn from_board(board: Board, white: W, black: B) -> Self {
        Game {
            board,
            white,
            black,
            max_plies: None,
            moves: Vec::new(),
        }
    }

    /// Stop after `plies` moves have been played in total.
    #[must_use]
    pub fn with_max_plies(mut self, plies: usize) -> Self {
        self.max_plies = Some(plies);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The outcome if the current position ends the game.
    pub fn outcome(&self) -> Option<GameOutcome> {
        let color = self.board.side_to_move();
        if self.board.checkmate(color) {
            Some(GameOutcome::Checkmate {
                winner: color.other(),
            })
        } else if self.board.stalemate(color) {
            Some(GameOutcome::Stalemate)
        } else if self.board.halfmove_clock() >= FIFTY_MOVE_PLIES {
            Some(GameOutcome::FiftyMoveRule)
        } else if self.max_plies.is_some_and(|max| self.moves.len() >= max) {
            Some(GameOutcome::PlyLimit)
        } else {
            None
        }
    }

    /// Ask the side to move for a move and apply it.
    pub fn step(&mut self) -> Result<Move, GameError> {
        let color = self.board.side_to_move();
        let choice = match color {
            Color::White => self.white.choose_move(&self.board),
            Color::Black => self.black.choose_move(&self.board),
        };
        let mv = choice.ok_or(GameError::NoMove { color })?;

        if let Err(source) = self.board.make_move(mv) {
            log::warn!("{color} offered illegal move {mv}: {source}");
            return Err(GameError::IllegalMove { color, mv, source });
        }
        self.moves.push(mv);
        Ok(mv)
    }

    /// Play until the game ends.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        loop {
            if let Some(outcome) = self.outcome() {
                log::info!(
                    "game over after {} plies: {outcome} ({})",
                    self.moves.len(),
                    self.board.to_fen()
                );
                return Ok(outcome);
            }
            self.step()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::RandomPlayer;

    /// Plays a fixed script, then gives up.
    struct Scripted(Vec<Move>);

    impl Player for Scripted {
        fn choose_move(&mut self, _board: &Board) -> Option<Move> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    fn script(moves: &[&str]) -> Scripted {
        Scripted(moves.iter().map(|m| m.parse().unwrap()).collect())
    }

    #[test]
    fn test_fools_mate() {
        let mut game = Game::new(script(&["f2f3", "g2g4"]), script(&["e7e5", "d8h4"]));
        assert_eq!(
            game.play(),
            Ok(GameOutcome::Checkmate {
                winner: Color::Black
            })
        );
        assert_eq!(game.moves().len(), 4);
    }

    #[test]
    fn test_illegal_move_is_an_error() {
        let mut game = Game::new(script(&["e2e5"]), script(&[]));
        let err = game.play().unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                color: Color::White,
                mv: "e2e5".parse().unwrap(),
                source: IllegalMoveError::NotLegal,
            }
        );
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_silent_player_is_an_error() {
        let mut game = Game::new(script(&["e2e4"]), script(&[]));
        assert_eq!(
            game.play(),
            Err(GameError::NoMove {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_ply_limit() {
        let mut game = Game::new(RandomPlayer::with_seed(1), RandomPlayer::with_seed(2))
            .with_max_plies(3);
        // No mate is possible within the first three plies
        assert_eq!(game.play(), Ok(GameOutcome::PlyLimit));
        assert_eq!(game.moves().len(), 3);
    }

    #[test]
    fn test_fifty_move_rule() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 80").unwrap();
        let mut game = Game::from_board(board, RandomPlayer::with_seed(1), RandomPlayer::with_seed(2));
        assert_eq!(game.play(), Ok(GameOutcome::FiftyMoveRule));
    }
}
