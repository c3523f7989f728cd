//! Property-based tests using proptest.

use crate::board::{rook_home, Board, Color, Move, Piece};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Random legal game from the initial position: every (before, move, after) step.
fn random_line(seed: u64, num_moves: usize) -> Vec<(Board, Move, Board)> {
    use rand::prelude::*;

    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut line = Vec::new();

    for _ in 0..num_moves {
        let moves = board.all_legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        let before = board.clone();
        board.make_move(mv).unwrap();
        line.push((before, mv, board.clone()));
    }

    line
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: FEN round-trip preserves the whole position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for (_, _, after) in random_line(seed, num_moves) {
            let restored = Board::from_fen(&after.to_fen()).unwrap();
            prop_assert_eq!(restored, after);
        }
    }

    /// Property: turns alternate and the fullmove number advances after Black
    #[test]
    fn prop_turn_and_fullmove(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for (before, _, after) in random_line(seed, num_moves) {
            prop_assert_eq!(after.side_to_move(), before.side_to_move().other());
            let expected = before.fullmove_number()
                + u32::from(before.side_to_move() == Color::Black);
            prop_assert_eq!(after.fullmove_number(), expected);
        }
    }

    /// Property: halfmove clock resets exactly on pawn moves and captures
    #[test]
    fn prop_halfmove_clock(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for (before, mv, after) in random_line(seed, num_moves) {
            let mover = before.piece_at(mv.from).unwrap();
            let is_pawn = mover.kind == Piece::Pawn;
            let capture = before.piece_at(mv.to).is_some()
                || (is_pawn && before.en_passant_target() == Some(mv.to));

            if is_pawn || capture {
                prop_assert_eq!(after.halfmove_clock(), 0);
            } else {
                prop_assert_eq!(after.halfmove_clock(), before.halfmove_clock() + 1);
            }
        }
    }

    /// Property: en passant target is set only by a double push, behind the pawn
    #[test]
    fn prop_en_passant_target(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for (before, mv, after) in random_line(seed, num_moves) {
            let mover = before.piece_at(mv.from).unwrap();
            let double_push = mover.kind == Piece::Pawn
                && (mv.to.row() - mv.from.row()).abs() == 2;

            if double_push {
                let behind = mv.from.offset((mv.to.row() - mv.from.row()) / 2, 0);
                prop_assert_eq!(after.en_passant_target(), Some(behind));
            } else {
                prop_assert_eq!(after.en_passant_target(), None);
            }
        }
    }

    /// Property: castling rights only shrink, and go with the king or rook
    #[test]
    fn prop_castling_rights_shrink(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for (before, mv, after) in random_line(seed, num_moves) {
            let rights = after.castling_rights();
            prop_assert!(rights.is_subset_of(before.castling_rights()));

            let mover = before.piece_at(mv.from).unwrap();
            if mover.kind == Piece::King {
                prop_assert!(!rights.has(mover.color, true));
                prop_assert!(!rights.has(mover.color, false));
            }
            for color in Color::BOTH {
                for kingside in [true, false] {
                    let home = rook_home(color, kingside);
                    if mv.from == home || mv.to == home {
                        prop_assert!(!rights.has(color, kingside));
                    }
                }
            }
        }
    }

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..10usize) {
        let board = random_line(seed, num_moves)
            .pop()
            .map_or_else(Board::new, |(_, _, after)| after);
        let color = board.side_to_move();

        for mv in board.all_legal_moves() {
            let mut child = board.clone();
            child.make_move(mv).unwrap();
            prop_assert!(!child.check(color), "Legal move left king in check: {:?}", mv);
        }
    }

    /// Property: mate and stalemate both mean no legal move, split by check
    #[test]
    fn prop_mate_and_stalemate(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for (_, _, after) in random_line(seed, num_moves) {
            let color = after.side_to_move();
            let no_moves = after.all_legal_moves().is_empty();
            prop_assert_eq!(after.checkmate(color), no_moves && after.check(color));
            prop_assert_eq!(after.stalemate(color), no_moves && !after.check(color));
        }
    }
}
