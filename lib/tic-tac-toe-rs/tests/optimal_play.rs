use tic_tac_toe::{
    search,
    select_move,
    Board,
    Mark,
    Score,
};

/// Remove a move from the options, keeping the order of the rest.
fn without(options: &[u8], index: u8) -> Vec<u8> {
    options.iter().copied().filter(|&i| i != index).collect()
}

/// Play every possible player strategy against the computer.
///
/// Returns the best score the player can reach, and counts finished games.
fn best_player_outcome(board: Board, options: &[u8], to_move: Mark, games: &mut u64) -> Score {
    if board.is_terminal() {
        *games += 1;
        return board.evaluate();
    }

    match to_move {
        Mark::Player => options
            .iter()
            .map(|&index| {
                best_player_outcome(
                    board.set(index, Some(Mark::Player)),
                    &without(options, index),
                    Mark::Opponent,
                    games,
                )
            })
            .max()
            .expect("missing player moves"),
        Mark::Opponent => {
            let index = select_move(board, options).expect("missing computer move");
            best_player_outcome(
                board.set(index, Some(Mark::Opponent)),
                &without(options, index),
                Mark::Player,
                games,
            )
        }
    }
}

/// The player's side of self-play: the first option with the highest score.
fn select_player_move(board: Board, options: &[u8]) -> u8 {
    let scores = search(board, options, Mark::Player);
    let best = scores.iter().copied().max().expect("missing scores");
    let position = scores
        .iter()
        .position(|&score| score == best)
        .expect("missing best score");
    options[position]
}

fn self_play(first: Mark) -> Board {
    let mut board = Board::new();
    let mut options = board.legal_moves();
    let mut to_move = first;

    while !board.is_terminal() {
        let index = match to_move {
            Mark::Player => select_player_move(board, &options),
            Mark::Opponent => select_move(board, &options).expect("missing computer move"),
        };
        board = board.set(index, Some(to_move));
        options = without(&options, index);
        to_move = to_move.inverse();
    }

    board
}

#[test]
fn computer_never_loses_moving_second() {
    let board = Board::new();
    let mut games = 0;
    let outcome = best_player_outcome(board, &board.legal_moves(), Mark::Player, &mut games);

    assert_ne!(outcome, Score::PlayerWin);
    assert!(games > 0);
}

#[test]
fn computer_never_loses_moving_first_from_any_opening() {
    for opening in 0..tic_tac_toe::NUM_TILES {
        let board = Board::new().set(opening, Some(Mark::Opponent));
        let mut games = 0;
        let outcome = best_player_outcome(board, &board.legal_moves(), Mark::Player, &mut games);

        assert_ne!(outcome, Score::PlayerWin, "lost after opening at {opening}");
        assert!(games > 0);
    }
}

#[test]
fn computer_never_loses_with_searched_opening() {
    let board = Board::new();
    let mut games = 0;
    let outcome = best_player_outcome(board, &board.legal_moves(), Mark::Opponent, &mut games);

    assert_ne!(outcome, Score::PlayerWin);
}

#[test]
fn self_play_is_a_draw() {
    for first in [Mark::Player, Mark::Opponent] {
        let board = self_play(first);
        assert!(board.is_full(), "{first:?} first ended early: {board:?}");
        assert_eq!(board.evaluate(), Score::Draw);
    }
}
