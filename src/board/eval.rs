use super::{Board, Color};

impl Board {
    /// Sum of piece values for `color` (P=1, N=3, B=4, R=4, Q=7, K=0).
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.pieces_of(color).map(|p| p.kind.value()).sum()
    }

    /// Material balance from `color`'s point of view.
    #[must_use]
    pub fn evaluate(&self, color: Color) -> i32 {
        self.material(color) - self.material(color.other())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_balanced() {
        let board = Board::new();
        // 8 + 2*3 + 2*4 + 2*4 + 7
        assert_eq!(board.material(Color::White), 37);
        assert_eq!(board.material(Color::Black), 37);
        assert_eq!(board.evaluate(Color::White), 0);
    }

    #[test]
    fn test_evaluate_is_antisymmetric() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K2Q w - - 0 1").unwrap();
        assert_eq!(board.evaluate(Color::White), 11);
        assert_eq!(board.evaluate(Color::Black), -11);
    }
}
