use std::fmt;

use super::{Board, Square};

const FILES: &str = "  a b c d e f g h";

/// Renders the board rank 8 first: rank digits on both sides, file letters
/// above and below, a glyph per piece and `_` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILES}")?;
        for row in 0..8i8 {
            let rank = 8 - row;
            write!(f, "{rank}")?;
            for col in 0..8i8 {
                let glyph = self
                    .piece_at(Square(row, col))
                    .map_or('_', |p| p.kind.glyph(p.color));
                write!(f, " {glyph}")?;
            }
            writeln!(f, " {rank}")?;
        }
        write!(f, "{FILES}")
    }
}
