//! Move generation.
//!
//! Each piece family yields its pseudo-legal targets lazily (own-king safety
//! ignored). The legality filter here plays every candidate on a copy of the
//! board and drops the ones that leave the mover in check.

mod kings;
mod knights;
mod pawns;
mod sliders;

use kings::KingTargets;
use knights::{StepTargets, KNIGHT_OFFSETS};
use pawns::PawnTargets;
use sliders::{SlidingTargets, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

use super::{Board, Color, Move, MoveList, Piece, PlacedPiece, Square, PROMOTION_PIECES};

/// Pseudo-legal targets of one piece, dispatched on its kind.
pub(crate) enum PseudoTargets<'a> {
    Pawn(PawnTargets),
    Knight(StepTargets<'a>),
    Slider(SlidingTargets<'a>),
    King(KingTargets<'a>),
}

impl Iterator for PseudoTargets<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        match self {
            PseudoTargets::Pawn(it) => it.next(),
            PseudoTargets::Knight(it) => it.next(),
            PseudoTargets::Slider(it) => it.next(),
            PseudoTargets::King(it) => it.next(),
        }
    }
}

impl Board {
    pub(crate) fn targets_of(&self, piece: PlacedPiece, with_castling: bool) -> PseudoTargets<'_> {
        let PlacedPiece {
            kind,
            color,
            square: from,
        } = piece;
        match kind {
            Piece::Pawn => PseudoTargets::Pawn(self.pawn_targets(from, color)),
            Piece::Knight => {
                PseudoTargets::Knight(StepTargets::new(self, from, color, &KNIGHT_OFFSETS))
            }
            Piece::Bishop => {
                PseudoTargets::Slider(SlidingTargets::new(self, from, color, &BISHOP_DIRECTIONS))
            }
            Piece::Rook => {
                PseudoTargets::Slider(SlidingTargets::new(self, from, color, &ROOK_DIRECTIONS))
            }
            Piece::Queen => {
                PseudoTargets::Slider(SlidingTargets::new(self, from, color, &QUEEN_DIRECTIONS))
            }
            Piece::King => PseudoTargets::King(self.king_targets(piece, with_castling)),
        }
    }

    /// Targets of `piece` obeying its movement pattern, ignoring own-king safety.
    pub fn pseudo_legal_targets(&self, piece: PlacedPiece) -> impl Iterator<Item = Square> + '_ {
        self.targets_of(piece, true)
    }

    /// Targets of `piece` that do not leave its own king attacked.
    #[must_use]
    pub fn legal_moves(&self, piece: PlacedPiece) -> Vec<Square> {
        self.pseudo_legal_targets(piece)
            .filter(|&to| !self.moving_into_check(piece, to))
            .collect()
    }

    /// Legal targets of whatever stands on `from`; empty for an empty square.
    #[must_use]
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        self.piece_at(from)
            .map(|piece| self.legal_moves(piece))
            .unwrap_or_default()
    }

    /// Play `piece` to `to` on a throwaway copy and ask whether its king is attacked.
    pub(crate) fn moving_into_check(&self, piece: PlacedPiece, to: Square) -> bool {
        let mut copy = self.clone();
        copy.place(piece, to, None);
        copy.check(piece.color)
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color).any(|piece| {
            self.pseudo_legal_targets(piece)
                .any(|to| !self.moving_into_check(piece, to))
        })
    }

    /// Every legal move for the side to move.
    ///
    /// A pawn reaching its last rank yields one move per promotion piece.
    #[must_use]
    pub fn all_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;
        for piece in self.pieces_of(color) {
            for to in self.legal_moves(piece) {
                if piece.kind == Piece::Pawn && to.row() == color.promotion_row() {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::new_promotion(piece.square, to, promo));
                    }
                } else {
                    moves.push(Move::new(piece.square, to));
                }
            }
        }
        moves
    }

    /// In check with no legal reply.
    pub fn checkmate(&self, color: Color) -> bool {
        self.check(color) && !self.has_legal_move(color)
    }

    /// Not in check but without a legal move.
    pub fn stalemate(&self, color: Color) -> bool {
        !self.check(color) && !self.has_legal_move(color)
    }

    pub fn has_winner(&self) -> bool {
        Color::BOTH.into_iter().any(|color| self.checkmate(color))
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves.iter() {
            let mut child = self.clone();
            child.play_unchecked(*m);
            nodes += child.perft(depth - 1);
        }

        nodes
    }
}
