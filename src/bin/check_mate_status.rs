use std::env;
use std::process;

use minimax_chess::board::{Board, Move};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return;
    }

    let mut board = Board::new();
    for text in args.iter().skip(1) {
        let mv: Move = match text.parse() {
            Ok(mv) => mv,
            Err(err) => {
                eprintln!("{text}: {err}");
                process::exit(1);
            }
        };
        if let Err(err) = board.make_move(mv) {
            eprintln!("{text}: {err}");
            process::exit(1);
        }
    }

    let color = board.side_to_move();
    let legal_moves = board.all_legal_moves();
    println!("{board}");
    println!("fen: {}", board.to_fen());
    println!("side_to_move: {color}");
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {}", board.check(color));
    println!("checkmate: {}", board.checkmate(color));
    println!("stalemate: {}", board.stalemate(color));
    for mv in legal_moves.iter() {
        println!("{mv}");
    }
}
