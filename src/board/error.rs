//! Error types for chess board operations.

use std::fmt;

use super::Color;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly six fields
    WrongFieldCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Placement field does not have exactly eight ranks
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// A rank describes fewer than eight files
    RankTooShort { rank: usize, files: usize },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Fullmove number is not a positive integer
    InvalidFullmoveNumber { found: String },
    /// A color does not have exactly one king
    KingCount { color: Color, found: usize },
    /// The side that just moved is left in check
    OpponentInCheck { color: Color },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "unknown value in FEN placement: '{char}'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank count {rank} in FEN, expected 8")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::RankTooShort { rank, files } => {
                write!(f, "Rank {rank} describes only {files} files")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid fullmove number '{found}'")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            FenError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not {color}'s turn")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Coordinates outside the 8x8 grid
    OutOfBounds { row: i8, col: i8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Rejection of a move by `Board::apply_move`.
///
/// Every variant means the board was left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveError {
    OriginOutOfBounds,
    TargetOutOfBounds,
    EmptySquare,
    /// The piece on the origin square belongs to the side not on move
    NotYourPiece { to_move: Color },
    /// The target is not among the piece's legal destinations
    NotLegal,
    /// A promotion piece was requested that cannot be used here
    InvalidPromotion,
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveError::OriginOutOfBounds => {
                write!(f, "Starting row and column must be be within 0-8 inclusive")
            }
            IllegalMoveError::TargetOutOfBounds => write!(
                f,
                "Cannot move outside the boundaries of the board. Please select a different destination."
            ),
            IllegalMoveError::EmptySquare => write!(
                f,
                "Cannot make a move from an empty square. Please select a valid piece to move."
            ),
            IllegalMoveError::NotYourPiece { to_move } => {
                let name = to_move.to_string().to_lowercase();
                write!(
                    f,
                    "It is {name}'s turn and {name} does not control the selected piece. Please select a valid piece to move."
                )
            }
            IllegalMoveError::NotLegal => write!(f, "Move is not legal"),
            IllegalMoveError::InvalidPromotion => {
                write!(f, "Promotion is only possible to a knight, bishop, rook or queen on the last rank")
            }
        }
    }
}

impl std::error::Error for IllegalMoveError {}

/// Broken board invariant; not expected from boards built through the public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    KingNotFound { color: Color },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::KingNotFound { color } => write!(f, "{color} king not found"),
        }
    }
}

impl std::error::Error for InvariantError {}
