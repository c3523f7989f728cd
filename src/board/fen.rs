use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastlingRights, Color, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// All six fields are required. Besides syntax, the position must have
    /// exactly one king per color and the side that is not on move must not
    /// be in check.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        // Parse piece placement
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut files = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    files += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if files >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: row,
                            files: files + 1,
                        });
                    }
                    board.set_piece(Square(row as i8, files as i8), color, piece);
                    files += 1;
                }
                if files > 8 {
                    return Err(FenError::TooManyFiles { rank: row, files });
                }
            }
            if files < 8 {
                return Err(FenError::RankTooShort { rank: row, files });
            }
        }

        // Parse side to move
        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        if parts[2] != "-" {
            for c in parts[2].chars() {
                let bit =
                    CastlingRights::bit_for_char(c).ok_or(FenError::InvalidCastling { char: c })?;
                board.castling_rights.insert_bits(bit);
            }
        }

        // Parse en passant target
        let invalid_ep = || FenError::InvalidEnPassant {
            found: parts[3].to_string(),
        };
        let ep: Square = parts[3].parse().map_err(|_| invalid_ep())?;
        if ep.in_bounds() {
            if !board.en_passant_plausible(ep) {
                return Err(invalid_ep());
            }
            board.en_passant_target = Some(ep);
        }

        board.halfmove_clock = parts[4]
            .parse()
            .map_err(|_| FenError::InvalidHalfmoveClock {
                found: parts[4].to_string(),
            })?;
        board.fullmove_number = parts[5]
            .parse()
            .ok()
            .filter(|&n: &u32| n > 0)
            .ok_or_else(|| FenError::InvalidFullmoveNumber {
                found: parts[5].to_string(),
            })?;

        board.validate_kings()?;
        Ok(board)
    }

    /// An en passant square must sit right behind a pawn of the side that
    /// just moved, with both it and the pawn's start square empty.
    fn en_passant_plausible(&self, ep: Square) -> bool {
        let pusher = self.side_to_move.other();
        let pawn = ep.offset(pusher.pawn_direction(), 0);
        let start = ep.offset(-pusher.pawn_direction(), 0);
        start.row() == pusher.pawn_start_row()
            && self.cell(pawn) == Some((pusher, Piece::Pawn))
            && self.is_empty(ep)
            && self.is_empty(start)
    }

    fn validate_kings(&self) -> Result<(), FenError> {
        for color in Color::BOTH {
            let found = self
                .pieces_of(color)
                .filter(|p| p.kind == Piece::King)
                .count();
            if found != 1 {
                return Err(FenError::KingCount { color, found });
            }
        }

        let waiting = self.side_to_move.other();
        if self.check(waiting) {
            return Err(FenError::OpponentInCheck { color: waiting });
        }
        Ok(())
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in &self.grid {
            let mut text = String::new();
            let mut empty = 0;
            for cell in row {
                if let Some((color, piece)) = cell {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char(*color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}
