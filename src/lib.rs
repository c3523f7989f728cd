pub mod board;
pub mod game;
pub mod player;

pub use board::{
    Board, CastlingRights, Color, FenError, IllegalMoveError, InvariantError, MiniMax, Move,
    MoveParseError, Piece, PlacedPiece, SearchResult, Square, SquareError,
};
pub use game::{Game, GameError, GameOutcome};
pub use player::{Player, RandomPlayer};
