use std::slice;

use super::super::{Board, Color, Square};

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Walks each direction square by square.
///
/// A ray stops before a piece of the mover's color and stops after (and
/// including) the first piece of the other color.
pub(crate) struct SlidingTargets<'a> {
    board: &'a Board,
    from: Square,
    color: Color,
    directions: slice::Iter<'static, (i8, i8)>,
    ray: Option<(Square, (i8, i8))>,
}

impl<'a> SlidingTargets<'a> {
    pub(crate) fn new(
        board: &'a Board,
        from: Square,
        color: Color,
        directions: &'static [(i8, i8)],
    ) -> Self {
        SlidingTargets {
            board,
            from,
            color,
            directions: directions.iter(),
            ray: None,
        }
    }
}

impl Iterator for SlidingTargets<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        loop {
            let Some((last, (d_row, d_col))) = self.ray else {
                let &dir = self.directions.next()?;
                self.ray = Some((self.from, dir));
                continue;
            };

            let target = last.offset(d_row, d_col);
            if !target.in_bounds() {
                self.ray = None;
                continue;
            }
            match self.board.color_on(target) {
                Some(owner) if owner == self.color => {
                    self.ray = None;
                }
                Some(_) => {
                    self.ray = None;
                    return Some(target);
                }
                None => {
                    self.ray = Some((target, (d_row, d_col)));
                    return Some(target);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(fen: &str, from: &str, dirs: &'static [(i8, i8)]) -> Vec<String> {
        let board = Board::from_fen(fen).unwrap();
        let from: Square = from.parse().unwrap();
        let color = board.piece_at(from).unwrap().color;
        let mut out: Vec<String> = SlidingTargets::new(&board, from, color, dirs)
            .map(|sq| sq.to_string())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_rook_stops_at_blockers() {
        // Rook on d4, own pawn on d6, enemy pawn on f4
        let got = targets("4k3/8/3P4/8/3R1p2/8/8/4K3 w - - 0 1", "d4", &ROOK_DIRECTIONS);
        assert_eq!(
            got,
            vec!["a4", "b4", "c4", "d1", "d2", "d3", "d5", "e4", "f4"]
        );
    }

    #[test]
    fn test_bishop_from_corner() {
        let got = targets("4k3/8/8/8/8/8/8/B3K3 w - - 0 1", "a1", &BISHOP_DIRECTIONS);
        assert_eq!(got, vec!["b2", "c3", "d4", "e5", "f6", "g7", "h8"]);
    }

    #[test]
    fn test_queen_in_start_position_has_no_targets() {
        let got = targets(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "d1",
            &QUEEN_DIRECTIONS,
        );
        assert!(got.is_empty());
    }
}
