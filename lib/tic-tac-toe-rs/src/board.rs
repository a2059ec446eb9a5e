use crate::{
    Mark,
    Score,
    NUM_TILES,
};

/// Make a bitboard mask from 3 tile indexes.
const fn line_mask(tile_indexes: [u8; 3]) -> u16 {
    (1 << tile_indexes[0]) | (1 << tile_indexes[1]) | (1 << tile_indexes[2])
}

/// Every winning line, in the order they are checked.
///
/// Rows first, then columns, then the two diagonals.
const LINES: [(WinType, [u8; 3]); 8] = [
    (WinType::Horizontal, [0, 1, 2]),
    (WinType::Horizontal, [3, 4, 5]),
    (WinType::Horizontal, [6, 7, 8]),
    (WinType::Vertical, [0, 3, 6]),
    (WinType::Vertical, [1, 4, 7]),
    (WinType::Vertical, [2, 5, 8]),
    (WinType::Diagonal, [0, 4, 8]),
    (WinType::AntiDiagonal, [2, 4, 6]),
];

/// All 9 tiles
const FULL_MASK: u16 = (1 << NUM_TILES) - 1;

/// The win type
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WinType {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

/// Winner Info
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WinnerInfo {
    /// The winning mark
    pub mark: Mark,

    /// The tile_indexes that are part of the win.
    ///
    /// Sorted from least to greatest.
    pub tile_indexes: [u8; 3],

    /// The win type
    pub win_type: WinType,
}

impl WinnerInfo {
    /// Get the least tile index
    pub fn start_tile_index(&self) -> u8 {
        self.tile_indexes[0]
    }

    /// Get the highest tile index
    pub fn end_tile_index(&self) -> u8 {
        self.tile_indexes[2]
    }
}

/// A Tic Tac Toe board
///
/// Tiles are indexed from 0 at the top left to 8 at the bottom right, row by row.
/// This is a plain value; setting a tile returns a new board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // the bitboards
    // 9 tiles, so it cannot fit in a u8 but can fit in a u16
    player_state: u16,
    opponent_state: u16,
}

impl Board {
    /// Make a new, empty [`Board`].
    pub fn new() -> Self {
        Board {
            player_state: 0,
            opponent_state: 0,
        }
    }

    /// Get the bitboard for a mark.
    fn state(self, mark: Mark) -> u16 {
        match mark {
            Mark::Player => self.player_state,
            Mark::Opponent => self.opponent_state,
        }
    }

    /// Get the winning line, if there is one.
    ///
    /// Lines are checked in a fixed order: rows, columns, then diagonals.
    /// The first line filled by a single mark is returned,
    /// so this is deterministic even for boards that cannot be reached in a real game.
    pub fn winner_info(self) -> Option<WinnerInfo> {
        LINES.iter().find_map(|&(win_type, tile_indexes)| {
            let mask = line_mask(tile_indexes);
            [Mark::Player, Mark::Opponent]
                .into_iter()
                .find(|&mark| self.state(mark) & mask == mask)
                .map(|mark| WinnerInfo {
                    mark,
                    tile_indexes,
                    win_type,
                })
        })
    }

    /// Score this board as it stands.
    ///
    /// A line whose tiles sum to `3` (see [`Mark::line_value`]) is a player win,
    /// and `-3` is an opponent win.
    /// [`Score::Draw`] means there is no winner yet;
    /// it does not say whether the game is over.
    pub fn evaluate(self) -> Score {
        self.winner_info()
            .map_or(Score::Draw, |info| Score::win_for(info.mark))
    }

    /// Returns true if every tile is taken.
    ///
    /// This does not check for wins.
    pub fn is_full(self) -> bool {
        (self.player_state | self.opponent_state) & FULL_MASK == FULL_MASK
    }

    /// Returns true if the game on this board is over.
    pub fn is_terminal(self) -> bool {
        self.evaluate() != Score::Draw || self.is_full()
    }

    /// Set the tile at the index.
    ///
    /// # Panics
    /// Panics if the index >= 9.
    #[must_use]
    pub fn set(mut self, index: u8, mark: Option<Mark>) -> Self {
        assert!(index < NUM_TILES, "tile index {index} is out of range");
        match mark {
            Some(Mark::Player) => {
                self.player_state |= 1 << index;
                self.opponent_state &= !(1 << index);
            }
            Some(Mark::Opponent) => {
                self.player_state &= !(1 << index);
                self.opponent_state |= 1 << index;
            }
            None => {
                self.player_state &= !(1 << index);
                self.opponent_state &= !(1 << index);
            }
        }
        self
    }

    /// Get the tile at the index.
    ///
    /// # Panics
    /// Panics if the index >= 9.
    pub fn get(self, index: u8) -> Option<Mark> {
        assert!(index < NUM_TILES, "tile index {index} is out of range");
        if self.player_state & (1 << index) != 0 {
            Some(Mark::Player)
        } else if self.opponent_state & (1 << index) != 0 {
            Some(Mark::Opponent)
        } else {
            None
        }
    }

    /// Get the empty tile indexes, in ascending order.
    ///
    /// This is the starting option set for a game on this board.
    pub fn legal_moves(self) -> Vec<u8> {
        self.iter()
            .filter_map(|(index, tile)| tile.is_none().then_some(index))
            .collect()
    }

    /// Get an iterator over the tiles.
    ///
    /// The iterator starts at 0 at the top left and ends at 8 at the bottom right.
    ///
    /// # Returns
    /// Returns a tuple pair, where the first element is the index and the second is the tile value.
    pub fn iter(self) -> impl Iterator<Item = (u8, Option<Mark>)> {
        (0..NUM_TILES).map(move |index| (index, self.get(index)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
