use std::slice;

use super::super::{Board, Color, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Single-step targets for knights and the king's adjacent squares: every
/// offset that stays on the board and does not land on a piece of `color`.
pub(crate) struct StepTargets<'a> {
    board: &'a Board,
    from: Square,
    color: Color,
    offsets: slice::Iter<'static, (i8, i8)>,
}

impl<'a> StepTargets<'a> {
    pub(crate) fn new(
        board: &'a Board,
        from: Square,
        color: Color,
        offsets: &'static [(i8, i8)],
    ) -> Self {
        StepTargets {
            board,
            from,
            color,
            offsets: offsets.iter(),
        }
    }
}

impl Iterator for StepTargets<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        self.offsets.by_ref().find_map(|&(d_row, d_col)| {
            let target = self.from.offset(d_row, d_col);
            (target.in_bounds() && self.board.color_on(target) != Some(self.color))
                .then_some(target)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_in_corner() {
        let board = Board::new();
        let mut got: Vec<String> =
            StepTargets::new(&board, "b1".parse().unwrap(), Color::White, &KNIGHT_OFFSETS)
                .map(|sq| sq.to_string())
                .collect();
        got.sort();
        assert_eq!(got, vec!["a3", "c3"]);
    }

    #[test]
    fn test_knight_in_center() {
        let board = Board::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").unwrap();
        let count =
            StepTargets::new(&board, "d4".parse().unwrap(), Color::White, &KNIGHT_OFFSETS).count();
        assert_eq!(count, 8);
    }
}
