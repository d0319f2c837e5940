//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the character used for this mark in the board text form.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Content of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark held by this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if the square holds no mark.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

impl From<Mark> for Square {
    fn from(mark: Mark) -> Self {
        Square::Occupied(mark)
    }
}

/// Status of a board, always derived from the cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum GameOutcome {
    /// No winner and at least one empty cell.
    #[strum(to_string = "in progress")]
    Ongoing,
    /// X owns a complete line.
    #[strum(to_string = "X wins")]
    XWins,
    /// O owns a complete line.
    #[strum(to_string = "O wins")]
    OWins,
    /// Board is full and nobody owns a line.
    #[strum(to_string = "draw")]
    Draw,
}

impl GameOutcome {
    /// The outcome in which `mark` has won.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => GameOutcome::XWins,
            Mark::O => GameOutcome::OWins,
        }
    }

    /// Returns the winning mark, if the outcome is a win.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::XWins => Some(Mark::X),
            GameOutcome::OWins => Some(Mark::O),
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }

    /// Returns true once no further moves can be made.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for mark in Mark::iter() {
            assert_ne!(mark.opponent(), mark);
            assert_eq!(mark.opponent().opponent(), mark);
        }
    }

    #[test]
    fn test_outcome_winner_roundtrip() {
        for mark in Mark::iter() {
            assert_eq!(GameOutcome::won_by(mark).winner(), Some(mark));
        }
        assert_eq!(GameOutcome::Draw.winner(), None);
        assert_eq!(GameOutcome::Ongoing.winner(), None);
    }

    #[test]
    fn test_only_ongoing_is_not_terminal() {
        let open: Vec<_> = GameOutcome::iter().filter(|o| !o.is_terminal()).collect();
        assert_eq!(open, vec![GameOutcome::Ongoing]);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(GameOutcome::XWins.to_string(), "X wins");
        assert_eq!(GameOutcome::Draw.to_string(), "draw");
    }
}
