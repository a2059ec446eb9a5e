use std::fmt::Write;
use tic_tac_toe::{
    Board,
    Mark,
};

/// Displays a [`Board`] as 3 lines of space-separated tiles.
///
/// Empty tiles are `-`.
/// Whoever moved first in the current game is `X`, and the other side is `O`.
#[derive(Debug, Copy, Clone)]
pub struct BoardDisplay {
    board: Board,
    computer_first: bool,
}

impl BoardDisplay {
    /// Make a new [`BoardDisplay`].
    pub fn new(board: Board, computer_first: bool) -> Self {
        Self {
            board,
            computer_first,
        }
    }

    /// Get the symbol for a tile.
    fn symbol(self, tile: Option<Mark>) -> char {
        match (tile, self.computer_first) {
            (None, _) => '-',
            (Some(Mark::Player), false) | (Some(Mark::Opponent), true) => 'X',
            (Some(Mark::Player), true) | (Some(Mark::Opponent), false) => 'O',
        }
    }
}

impl std::fmt::Display for BoardDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, tile) in self.board.iter() {
            f.write_char(self.symbol(tile))?;
            if index % 3 == 2 {
                f.write_char('\n')?;
            } else {
                f.write_char(' ')?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        let display = BoardDisplay::new(Board::new(), false);
        assert_eq!(display.to_string(), "- - -\n- - -\n- - -\n");
    }

    #[test]
    fn first_mover_is_x() {
        let board = Board::new()
            .set(0, Some(Mark::Player))
            .set(4, Some(Mark::Opponent))
            .set(8, Some(Mark::Player));

        assert_eq!(
            BoardDisplay::new(board, false).to_string(),
            "X - -\n- O -\n- - X\n"
        );
        assert_eq!(
            BoardDisplay::new(board, true).to_string(),
            "O - -\n- X -\n- - O\n"
        );
    }
}
