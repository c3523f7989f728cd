use super::error::IllegalMoveError;
use super::{rook_home, Board, Color, Move, Piece, PlacedPiece, Square};

impl Board {
    /// Move the piece on `origin` to `target`; a pawn reaching its last rank becomes a queen.
    ///
    /// On error the board is left untouched.
    pub fn apply_move(&mut self, origin: Square, target: Square) -> Result<(), IllegalMoveError> {
        self.make_move(Move::new(origin, target))
    }

    /// Validate and play `mv`, honoring an explicit promotion choice.
    ///
    /// Checks run in a fixed order: origin on the board, target on the board,
    /// origin occupied, piece owned by the side to move, target among the
    /// piece's legal destinations, promotion request valid. Nothing is
    /// mutated until every check passes.
    pub fn make_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        let piece = self.validate_move(mv)?;
        self.play(piece, mv);
        Ok(())
    }

    fn validate_move(&self, mv: Move) -> Result<PlacedPiece, IllegalMoveError> {
        if !mv.from.in_bounds() {
            return Err(IllegalMoveError::OriginOutOfBounds);
        }
        if !mv.to.in_bounds() {
            return Err(IllegalMoveError::TargetOutOfBounds);
        }
        let piece = self
            .piece_at(mv.from)
            .ok_or(IllegalMoveError::EmptySquare)?;
        if piece.color != self.side_to_move {
            return Err(IllegalMoveError::NotYourPiece {
                to_move: self.side_to_move,
            });
        }
        if !self.legal_moves(piece).contains(&mv.to) {
            return Err(IllegalMoveError::NotLegal);
        }
        if let Some(promo) = mv.promotion {
            let reaches_last_rank =
                piece.kind == Piece::Pawn && mv.to.row() == piece.color.promotion_row();
            if !reaches_last_rank || !promo.is_promotion_choice() {
                return Err(IllegalMoveError::InvalidPromotion);
            }
        }
        Ok(piece)
    }

    /// Play a move taken from `all_legal_moves` without re-validating it.
    pub(crate) fn play_unchecked(&mut self, mv: Move) {
        if let Some(piece) = self.piece_at(mv.from) {
            self.play(piece, mv);
        }
    }

    fn play(&mut self, piece: PlacedPiece, mv: Move) {
        let Move { from, to, promotion } = mv;
        let mover = self.side_to_move;
        let is_pawn = piece.kind == Piece::Pawn;
        let en_passant = is_pawn && self.en_passant_target == Some(to);
        let capture = en_passant || !self.is_empty(to);

        self.en_passant_target = (is_pawn && (to.row() - from.row()).abs() == 2)
            .then(|| from.offset(piece.color.pawn_direction(), 0));

        if is_pawn || capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if mover == Color::Black {
            self.fullmove_number += 1;
        }

        if piece.kind == Piece::King {
            self.castling_rights.remove_color(piece.color);
        }
        self.castling_rights.revoke_rook_home(from);
        self.castling_rights.revoke_rook_home(to);

        self.place(piece, to, promotion);
        self.side_to_move = mover.other();

        log::trace!("{mover} played {mv}");
    }

    /// Placement-only half of a move.
    ///
    /// Relocates the rook on a castle, lifts the pawn taken en passant and
    /// swaps in the promotion piece (queen by default). Clocks, rights and the
    /// side to move are left alone. Returns whether anything was captured.
    pub(crate) fn place(&mut self, piece: PlacedPiece, to: Square, promotion: Option<Piece>) -> bool {
        let from = piece.square;
        let mut captured = !self.is_empty(to);

        match piece.kind {
            // A diagonal pawn step onto an empty square can only be en passant
            Piece::Pawn if from.col() != to.col() && !captured => {
                let victim = Square(from.row(), to.col());
                if self.cell(victim) == Some((piece.color.other(), Piece::Pawn)) {
                    self.clear_square(victim);
                    captured = true;
                }
            }
            Piece::King if (to.col() - from.col()).abs() > 1 => {
                let kingside = to.col() > from.col();
                let step = if kingside { 1 } else { -1 };
                self.relocate(rook_home(piece.color, kingside), from.offset(0, step));
            }
            _ => {}
        }

        let kind = if piece.kind == Piece::Pawn && to.row() == piece.color.promotion_row() {
            promotion.unwrap_or(Piece::Queen)
        } else {
            piece.kind
        };
        self.clear_square(from);
        self.set_piece(to, piece.color, kind);
        captured
    }
}
