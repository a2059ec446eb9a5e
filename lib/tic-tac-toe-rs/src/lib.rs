mod board;
mod mark;

pub use crate::{
    board::{
        Board,
        WinType,
        WinnerInfo,
    },
    mark::{
        Mark,
        Score,
    },
};

/// The # of tic-tac-toe tiles
pub const NUM_TILES: u8 = 9;

/// Play the option at `position` for `mark`.
///
/// # Returns
/// Returns the child board and the options without the played move, in their original order.
///
/// # Panics
/// Panics if the option is out of range or names a taken tile.
fn play(board: Board, options: &[u8], position: usize, mark: Mark) -> (Board, Vec<u8>) {
    let index = options[position];
    assert!(
        board.get(index).is_none(),
        "option {index} names a taken tile, the board and options are out of sync"
    );

    let mut child_options = Vec::with_capacity(options.len() - 1);
    child_options.extend_from_slice(&options[..position]);
    child_options.extend_from_slice(&options[position + 1..]);

    (board.set(index, Some(mark)), child_options)
}

/// Get the minimax value of a board.
///
/// `options` are the legal moves for `board` and `to_move` is the mark that moves next.
/// The player picks the highest child value and the opponent picks the lowest.
/// A board with a winner or no options is scored with [`Board::evaluate`].
///
/// This searches the whole game tree below `board`, without pruning or caching.
///
/// # Panics
/// Panics if an option is out of range or names a taken tile.
pub fn value(board: Board, options: &[u8], to_move: Mark) -> Score {
    let score = board.evaluate();
    if score != Score::Draw || options.is_empty() {
        return score;
    }

    let child_values = (0..options.len()).map(|position| {
        let (child, child_options) = play(board, options, position, to_move);
        value(child, &child_options, to_move.inverse())
    });

    let best = match to_move {
        Mark::Player => child_values.max(),
        Mark::Opponent => child_values.min(),
    };

    // `options` is not empty, so there is always a best child.
    best.unwrap_or(score)
}

/// Score every option for the side to move.
///
/// The computer ([`Mark::Opponent`]) is the maximizing side: the score of each of its moves is
/// the best outcome the player can then force, so the computer wants the lowest score.
/// When `to_move` is [`Mark::Player`] the roles are swapped.
///
/// # Returns
/// Returns one [`Score`] per option, in the same order as `options`.
/// If `board` already has a winner or `options` is empty,
/// returns a single element holding [`Board::evaluate`] instead.
///
/// # Panics
/// Panics if an option is out of range or names a taken tile.
pub fn search(board: Board, options: &[u8], to_move: Mark) -> Vec<Score> {
    let score = board.evaluate();
    if score != Score::Draw || options.is_empty() {
        return vec![score];
    }

    (0..options.len())
        .map(|position| {
            let (child, child_options) = play(board, options, position, to_move);
            value(child, &child_options, to_move.inverse())
        })
        .collect()
}

/// Choose the computer's move.
///
/// Picks the option with the lowest score from [`search`].
/// Ties go to the option listed first in `options`.
///
/// # Returns
/// Returns `None` if the game on `board` is already over.
///
/// # Panics
/// Panics if an option is out of range or names a taken tile.
pub fn select_move(board: Board, options: &[u8]) -> Option<u8> {
    if board.evaluate() != Score::Draw || options.is_empty() {
        return None;
    }

    let scores = search(board, options, Mark::Opponent);
    let (position, _score) = scores
        .iter()
        .enumerate()
        .min_by_key(|(_position, score)| **score)?;

    options.get(position).copied()
}
