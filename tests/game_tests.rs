//! Full games between the stock players.

use minimax_chess::board::Board;
use minimax_chess::{Game, GameOutcome, MiniMax, Player, RandomPlayer};

#[test]
fn random_games_finish_cleanly() {
    for seed in 0..4 {
        let mut game = Game::new(
            RandomPlayer::with_seed(seed),
            RandomPlayer::with_seed(seed + 100),
        )
        .with_max_plies(120);
        let outcome = game.play().expect("stock players only play legal moves");

        assert!(game.moves().len() <= 120);
        if outcome == GameOutcome::PlyLimit {
            assert_eq!(game.moves().len(), 120);
        }

        let board = game.board();
        assert_eq!(&Board::from_fen(&board.to_fen()).unwrap(), board);
    }
}

#[test]
fn replaying_the_move_list_reaches_the_final_position() {
    let mut game = Game::new(RandomPlayer::with_seed(7), RandomPlayer::with_seed(8))
        .with_max_plies(40);
    game.play().unwrap();

    let mut board = Board::new();
    for &mv in game.moves() {
        board.make_move(mv).unwrap();
    }
    assert_eq!(&board, game.board());
}

#[test]
fn minimax_mates_from_a_won_ending() {
    // King and queen against a bare king in the corner
    let board = Board::from_fen("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1").unwrap();
    let mut game = Game::from_board(board, MiniMax::with_seed(0, 1), RandomPlayer::with_seed(2))
        .with_max_plies(1);
    assert_eq!(
        game.play(),
        Ok(GameOutcome::Checkmate {
            winner: minimax_chess::Color::White
        })
    );
}

#[test]
fn boxed_players_mix() {
    let white: Box<dyn Player> = Box::new(MiniMax::with_seed(0, 5));
    let black: Box<dyn Player> = Box::new(RandomPlayer::with_seed(6));
    let mut game = Game::new(white, black).with_max_plies(6);
    assert!(game.play().is_ok());
}
