use super::error::InvariantError;
use super::{CastlingRights, Color, Piece, PlacedPiece, Square};

/// FEN of the standard starting position
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub(crate) type Cell = Option<(Color, Piece)>;

/// Full game state: occupancy grid plus the FEN bookkeeping fields.
///
/// Boards are plain values. Cloning produces an independent copy, which is
/// how legality checks and search nodes explore hypothetical positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) grid: [[Cell; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, piece) in back_rank.iter().enumerate() {
            let col = col as i8;
            board.set_piece(Square(7, col), Color::White, *piece);
            board.set_piece(Square(0, col), Color::Black, *piece);
            board.set_piece(Square(6, col), Color::White, Piece::Pawn);
            board.set_piece(Square(1, col), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The en passant target, or `None` when the FEN field is "-"
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let (row, col) = sq.index();
        self.grid[row][col] = Some((color, piece));
    }

    pub(crate) fn clear_square(&mut self, sq: Square) -> Cell {
        let (row, col) = sq.index();
        self.grid[row][col].take()
    }

    /// Move whatever stands on `from` to `to`, overwriting `to`.
    ///
    /// Pure placement change; clocks, rights and side to move are untouched.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        if let Some((color, piece)) = self.clear_square(from) {
            self.set_piece(to, color, piece);
        }
    }

    /// Color and kind on an in-bounds square
    pub(crate) fn cell(&self, sq: Square) -> Cell {
        let (row, col) = sq.index();
        self.grid[row][col]
    }

    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.cell(sq).is_none()
    }

    pub(crate) fn color_on(&self, sq: Square) -> Option<Color> {
        self.cell(sq).map(|(color, _)| color)
    }

    /// The piece on `sq`; `None` for empty or off-board squares.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<PlacedPiece> {
        if !sq.in_bounds() {
            return None;
        }
        self.cell(sq)
            .map(|(color, kind)| PlacedPiece::new(kind, color, sq))
    }

    /// Every piece of `color`, rank 8 first.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = PlacedPiece> + '_ {
        Square::all()
            .filter_map(move |sq| self.piece_at(sq))
            .filter(move |p| p.color == color)
    }

    /// Every piece on the board, rank 8 first.
    pub fn pieces(&self) -> impl Iterator<Item = PlacedPiece> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq))
    }

    pub fn king_of(&self, color: Color) -> Result<Square, InvariantError> {
        self.pieces_of(color)
            .find(|p| p.kind == Piece::King)
            .map(|p| p.square)
            .ok_or(InvariantError::KingNotFound { color })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matches_initial_fen() {
        assert_eq!(Board::new().to_fen(), INITIAL_FEN);
        assert_eq!(Board::new(), Board::from_fen(INITIAL_FEN).unwrap());
    }

    #[test]
    fn test_piece_at() {
        let board = Board::new();
        let knight = board.piece_at("b1".parse().unwrap()).unwrap();
        assert_eq!(knight.kind, Piece::Knight);
        assert_eq!(knight.color, Color::White);
        assert!(board.piece_at("e4".parse().unwrap()).is_none());
        assert!(board.piece_at(Square::OFF_BOARD).is_none());
    }

    #[test]
    fn test_pieces_of_counts() {
        let board = Board::new();
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
        assert!(board
            .pieces_of(Color::Black)
            .all(|p| p.color == Color::Black));
    }

    #[test]
    fn test_king_of() {
        let board = Board::new();
        assert_eq!(board.king_of(Color::White).unwrap().to_string(), "e1");
        assert_eq!(board.king_of(Color::Black).unwrap().to_string(), "e8");
        assert_eq!(
            Board::empty().king_of(Color::White),
            Err(InvariantError::KingNotFound {
                color: Color::White
            })
        );
    }
}
