use std::iter::Chain;
use std::slice;

use super::knights::StepTargets;
use super::{PseudoTargets, QUEEN_DIRECTIONS};
use super::super::{king_home, rook_home, Board, Color, Piece, PlacedPiece, Square};

pub(crate) type KingTargets<'a> = Chain<StepTargets<'a>, CastlingTargets<'a>>;

/// Kingside first, then queenside
const WINGS: [bool; 2] = [true, false];

/// Lazily yields the castling destinations (g- and c-file) for one king.
pub(crate) struct CastlingTargets<'a> {
    board: &'a Board,
    king: PlacedPiece,
    wings: slice::Iter<'static, bool>,
}

impl Iterator for CastlingTargets<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let board = self.board;
        let king = self.king;
        self.wings
            .by_ref()
            .find_map(|&kingside| board.castling_target(king, kingside))
    }
}

impl Board {
    pub(crate) fn king_targets(&self, king: PlacedPiece, with_castling: bool) -> KingTargets<'_> {
        let wings: &'static [bool] = if with_castling && king.square == king_home(king.color) {
            &WINGS
        } else {
            &[]
        };
        StepTargets::new(self, king.square, king.color, &QUEEN_DIRECTIONS).chain(CastlingTargets {
            board: self,
            king,
            wings: wings.iter(),
        })
    }

    /// The king's destination when castling on one wing is available.
    ///
    /// Needs the right, the rook on its home square, empty squares between
    /// king and rook, the king not in check and the square the king crosses
    /// not attacked. Whether the destination itself is safe is left to the
    /// legality filter.
    fn castling_target(&self, king: PlacedPiece, kingside: bool) -> Option<Square> {
        let color = king.color;
        if !self.castling_rights.has(color, kingside) {
            return None;
        }
        let rook = rook_home(color, kingside);
        if self.cell(rook) != Some((color, Piece::Rook)) {
            return None;
        }

        let step: i8 = if kingside { 1 } else { -1 };
        let mut between = king.square.offset(0, step);
        while between != rook {
            if !self.is_empty(between) {
                return None;
            }
            between = between.offset(0, step);
        }

        let crossed = king.square.offset(0, step);
        if self.check(color) || self.moving_into_check(king, crossed) {
            return None;
        }
        Some(king.square.offset(0, 2 * step))
    }

    /// True iff some piece of `by` could move to (or capture on) `square`.
    ///
    /// Pawns count by their diagonal attacks, so this is also correct for
    /// empty squares. Castling never attacks anything and is skipped.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces_of(by).any(|piece| match piece.kind {
            Piece::Pawn => Board::pawn_attacks(piece.square, by).any(|sq| sq == square),
            _ => self
                .attack_targets(piece)
                .any(|sq| sq == square),
        })
    }

    /// True iff `color`'s king stands on a square the other side attacks.
    pub fn check(&self, color: Color) -> bool {
        match self.king_of(color) {
            Ok(king) => self.is_square_attacked(king, color.other()),
            Err(err) => {
                log::error!("check query on a broken board: {err}");
                false
            }
        }
    }

    /// Pseudo-legal targets without castling candidates.
    pub(crate) fn attack_targets(&self, piece: PlacedPiece) -> PseudoTargets<'_> {
        self.targets_of(piece, false)
    }
}
