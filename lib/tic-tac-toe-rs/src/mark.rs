/// A mark placed on a tile.
///
/// The human is always the [`Mark::Player`] and the computer is always the [`Mark::Opponent`],
/// regardless of who moved first or which symbol is drawn for them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The human player
    Player,

    /// The computer
    Opponent,
}

impl Mark {
    /// Invert the marks
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }

    /// The value this mark contributes to a line sum.
    ///
    /// A line summing to `3` or `-3` is a win.
    pub fn line_value(self) -> i8 {
        match self {
            Self::Player => 1,
            Self::Opponent => -1,
        }
    }
}

/// The outcome of a board under optimal play, from the player's point of view.
///
/// Ordered by value, so `OpponentWin < Draw < PlayerWin`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    /// The computer wins
    OpponentWin = -1,

    /// Nobody wins, or the game is not over yet
    Draw = 0,

    /// The human player wins
    PlayerWin = 1,
}

impl Score {
    /// Get the score as a signed integer in `-1..=1`.
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// Get the score for a win by the given mark.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::Player => Self::PlayerWin,
            Mark::Opponent => Self::OpponentWin,
        }
    }

    /// Get the winning mark, if this is a win.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Self::PlayerWin => Some(Mark::Player),
            Self::OpponentWin => Some(Mark::Opponent),
            Self::Draw => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn score_order() {
        assert!(Score::OpponentWin < Score::Draw);
        assert!(Score::Draw < Score::PlayerWin);
        assert_eq!(Score::OpponentWin.as_i8(), -1);
        assert_eq!(Score::PlayerWin.as_i8(), 1);
    }

    #[test]
    fn win_for_round_trips() {
        for mark in [Mark::Player, Mark::Opponent] {
            assert_eq!(Score::win_for(mark).winner(), Some(mark));
            assert_eq!(Score::win_for(mark).as_i8(), mark.line_value());
        }
        assert_eq!(Score::Draw.winner(), None);
    }
}
