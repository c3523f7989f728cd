use std::array;
use std::iter::Flatten;

use super::super::{Board, Color, Square};

pub(crate) type PawnTargets = Flatten<array::IntoIter<Option<Square>, 4>>;

impl Board {
    /// Pushes, the double push from the start row, and diagonal captures.
    ///
    /// A diagonal counts as capturable when it holds a piece of the other
    /// color or is the current en passant target.
    pub(crate) fn pawn_targets(&self, from: Square, color: Color) -> PawnTargets {
        let dir = color.pawn_direction();

        let one = from.offset(dir, 0);
        let single = (one.in_bounds() && self.is_empty(one)).then_some(one);

        let two = from.offset(2 * dir, 0);
        let double = (single.is_some()
            && from.row() == color.pawn_start_row()
            && two.in_bounds()
            && self.is_empty(two))
        .then_some(two);

        let capture = |d_col: i8| {
            let target = from.offset(dir, d_col);
            let capturable = target.in_bounds()
                && (self.color_on(target) == Some(color.other())
                    || self.en_passant_target == Some(target));
            capturable.then_some(target)
        };

        [single, double, capture(1), capture(-1)]
            .into_iter()
            .flatten()
    }

    /// Squares a pawn of `color` on `from` attacks, whether or not occupied.
    pub(crate) fn pawn_attacks(from: Square, color: Color) -> impl Iterator<Item = Square> {
        let dir = color.pawn_direction();
        [from.offset(dir, -1), from.offset(dir, 1)]
            .into_iter()
            .filter(|sq| sq.in_bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(board: &Board, from: &str) -> Vec<String> {
        let from: Square = from.parse().unwrap();
        let color = board.piece_at(from).unwrap().color;
        let mut out: Vec<String> = board
            .pawn_targets(from, color)
            .map(|sq| sq.to_string())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_pawn_start_row() {
        let board = Board::new();
        assert_eq!(targets(&board, "e2"), vec!["e3", "e4"]);
        assert_eq!(targets(&board, "d7"), vec!["d5", "d6"]);
    }

    #[test]
    fn test_pawn_blocked_double_push() {
        // Own knight on e3 blocks e2; enemy knight on d3 blocks d2 but can be taken from e2
        let board = Board::from_fen("4k3/8/8/8/8/3nN3/3PP3/4K3 w - - 0 1").unwrap();
        assert_eq!(targets(&board, "e2"), vec!["d3"]);
        assert!(targets(&board, "d2").is_empty());

        // Piece on the fourth rank blocks only the double push
        let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
        assert_eq!(targets(&board, "e2"), vec!["e3"]);
    }

    #[test]
    fn test_pawn_en_passant_target() {
        let board =
            Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
                .unwrap();
        assert_eq!(targets(&board, "e5"), vec!["d6", "e6"]);
    }

    #[test]
    fn test_pawn_attacks_edge() {
        let attacks: Vec<String> = Board::pawn_attacks("a2".parse().unwrap(), Color::White)
            .map(|sq| sq.to_string())
            .collect();
        assert_eq!(attacks, vec!["b3"]);
    }
}
