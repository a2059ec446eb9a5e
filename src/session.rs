mod input;
mod render;

pub use self::{
    input::{
        parse_square,
        parse_yes_no,
        InputError,
        Prompt,
        TokenReader,
    },
    render::BoardDisplay,
};
use crate::config::Config;
use anyhow::{
    bail,
    Context,
};
use rand::{
    rngs::StdRng,
    Rng,
    SeedableRng,
};
use std::{
    io::{
        BufRead,
        Write,
    },
    time::Instant,
};
use tic_tac_toe::{
    Board,
    Mark,
    Score,
    NUM_TILES,
};
use tracing::{
    debug,
    info,
};

/// The result of a finished game, from the human's point of view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    Tie,
}

impl GameOutcome {
    /// The message shown at the end of a game
    pub fn message(self) -> &'static str {
        match self {
            Self::Won => "You won (Somehow?).",
            Self::Lost => "You lost.",
            Self::Tie => "It's a tie.",
        }
    }
}

impl From<Score> for GameOutcome {
    fn from(score: Score) -> Self {
        match score {
            Score::PlayerWin => Self::Won,
            Score::OpponentWin => Self::Lost,
            Score::Draw => Self::Tie,
        }
    }
}

/// The state of the game in progress.
///
/// The board and the open squares are kept in sync by [`GameState::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    options: Vec<u8>,
    computer_first: bool,
}

impl GameState {
    /// Make a new game with an empty board.
    pub fn new(computer_first: bool) -> Self {
        let board = Board::new();
        Self {
            board,
            options: board.legal_moves(),
            computer_first,
        }
    }

    /// Get the board
    pub fn board(&self) -> Board {
        self.board
    }

    /// Get the open squares, in the order the computer considers them
    pub fn options(&self) -> &[u8] {
        &self.options
    }

    /// Whether the computer moves first in this game
    pub fn computer_first(&self) -> bool {
        self.computer_first
    }

    /// Place a mark on an open square.
    ///
    /// # Panics
    /// Panics if the square is not open.
    pub fn play(&mut self, index: u8, mark: Mark) {
        let position = self
            .options
            .iter()
            .position(|&option| option == index);
        let Some(position) = position else {
            panic!("square {index} is not open");
        };

        self.options.remove(position);
        self.board = self.board.set(index, Some(mark));
    }

    /// Whether the last move by `mark` ended the game.
    fn is_over_after(&self, mark: Mark) -> bool {
        self.board.evaluate() == Score::win_for(mark) || self.options.is_empty()
    }

    /// Clear the board and swap who moves first.
    pub fn next_game(&mut self) {
        *self = Self::new(!self.computer_first);
    }

    /// Get a displayable version of the board
    pub fn display(&self) -> BoardDisplay {
        BoardDisplay::new(self.board, self.computer_first)
    }
}

/// An interactive session of tic-tac-toe games against the computer.
#[derive(Debug)]
pub struct Session<R, W> {
    input: TokenReader<R>,
    output: W,
    rng: StdRng,
    random_opening: bool,

    state: GameState,
    games_played: u64,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Make a new [`Session`].
    pub fn new(input: R, output: W, config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            input: TokenReader::new(input),
            output,
            rng,
            random_opening: config.random_opening,

            state: GameState::new(false),
            games_played: 0,
        }
    }

    /// Get the current game
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the number of finished games
    pub fn games_played(&self) -> u64 {
        self.games_played
    }

    /// Play games until the input is closed or `max_games` games are finished.
    ///
    /// Who moves first alternates every game.
    pub fn run(&mut self, max_games: Option<u32>) -> anyhow::Result<()> {
        let player_first = match self.prompt("Do you want to go first? (Y/N) >", parse_yes_no)? {
            Some(player_first) => player_first,
            None => {
                info!("input closed before the first game");
                return Ok(());
            }
        };
        self.state = GameState::new(!player_first);

        while max_games.map_or(true, |max_games| self.games_played < u64::from(max_games)) {
            match self.play_game()? {
                Some(outcome) => {
                    info!(
                        game = self.games_played,
                        "game ended: {}",
                        outcome.message()
                    );
                }
                None => {
                    info!("input closed, ending session");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Play one game.
    ///
    /// # Returns
    /// Returns `None` if the input closed during the game.
    fn play_game(&mut self) -> anyhow::Result<Option<GameOutcome>> {
        info!(
            computer_first = self.state.computer_first,
            "starting game {}",
            self.games_played + 1
        );

        if self.state.computer_first {
            self.computer_opening()?;
        }

        loop {
            self.write_board()?;

            let options = self.state.options.clone();
            let index = match self.prompt("Choose a square (0 - 8) >", |token| {
                parse_square(token, &options)
            })? {
                Some(index) => index,
                None => return Ok(None),
            };
            debug!("player chose square {index}");
            self.state.play(index, Mark::Player);
            if self.state.is_over_after(Mark::Player) {
                break;
            }

            self.computer_turn()?;
            if self.state.is_over_after(Mark::Opponent) {
                break;
            }
        }

        self.write_board()?;
        let outcome = GameOutcome::from(self.state.board.evaluate());
        writeln!(self.output, "{}", outcome.message()).context("failed to write outcome")?;

        if let Some(info) = self.state.board.winner_info() {
            debug!(
                "{:?} won on {:?} line {:?}",
                info.mark, info.win_type, info.tile_indexes
            );
        }

        self.games_played += 1;
        self.state.next_game();

        Ok(Some(outcome))
    }

    /// Make the computer's first move of a game.
    fn computer_opening(&mut self) -> anyhow::Result<()> {
        if self.random_opening {
            let index = self.rng.gen_range(0..NUM_TILES);
            debug!("computer opened on square {index}");
            self.state.play(index, Mark::Opponent);
            Ok(())
        } else {
            self.computer_turn()
        }
    }

    /// Search for and make the computer's move.
    #[tracing::instrument(skip(self), fields(options = ?self.state.options))]
    fn computer_turn(&mut self) -> anyhow::Result<()> {
        let start = Instant::now();
        let Some(index) = tic_tac_toe::select_move(self.state.board, &self.state.options) else {
            bail!("the computer has no move, but the game is not over");
        };
        debug!("computer chose square {index} in {:?}", start.elapsed());

        self.state.play(index, Mark::Opponent);
        Ok(())
    }

    /// Print the board.
    fn write_board(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", self.state.display()).context("failed to write board")
    }

    /// Ask for input until a token is accepted.
    ///
    /// # Returns
    /// Returns `None` if the input closed.
    fn prompt<T, F>(&mut self, message: &str, mut check: F) -> anyhow::Result<Option<T>>
    where
        F: FnMut(&str) -> Prompt<T>,
    {
        write!(self.output, "{message} ").context("failed to write prompt")?;
        self.output.flush().context("failed to flush output")?;

        loop {
            let token = match self.input.next_token().context("failed to read input")? {
                Some(token) => token,
                None => return Ok(None),
            };

            match check(&token) {
                Prompt::Accept(value) => return Ok(Some(value)),
                Prompt::Retry(error) => {
                    debug!("rejected input \"{token}\": {error:?}");
                    if error.discards_line() {
                        self.input.discard_line();
                    }

                    write!(self.output, "{error} ").context("failed to write prompt")?;
                    self.output.flush().context("failed to flush output")?;
                }
            }
        }
    }
}
