use std::env;
use std::process;

use minimax_chess::{Game, MiniMax, RandomPlayer};

const DEFAULT_DEPTH: usize = 1;
const MAX_PLIES: usize = 300;

/// Plays MiniMax (White) against a random mover (Black) and prints the result.
///
/// Usage: `minimax_chess [depth] [seed]`
fn main() {
    let mut args = env::args().skip(1);
    let depth = parse_arg(args.next(), "depth").unwrap_or(DEFAULT_DEPTH);
    let seed = parse_arg(args.next(), "seed");

    let (white, black) = match seed {
        Some(seed) => (
            MiniMax::with_seed(depth, seed),
            RandomPlayer::with_seed(seed.wrapping_add(1)),
        ),
        None => (MiniMax::new(depth), RandomPlayer::new()),
    };

    let mut game = Game::new(white, black).with_max_plies(MAX_PLIES);
    match game.play() {
        Ok(outcome) => {
            println!("{}", game.board());
            println!("{}", game.board().to_fen());
            let moves: Vec<String> = game.moves().iter().map(ToString::to_string).collect();
            println!("{}", moves.join(" "));
            println!("{outcome} after {} plies", game.moves().len());
        }
        Err(err) => {
            eprintln!("game aborted: {err}");
            process::exit(1);
        }
    }
}

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, name: &str) -> Option<T> {
    let text = arg?;
    match text.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("invalid {name}: {text}");
            process::exit(2);
        }
    }
}
