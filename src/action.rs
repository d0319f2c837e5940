//! Moves and the errors raised when a match rejects one.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{BoardError, GameOutcome, Mark};

/// A mark placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{mark} -> {index}")]
pub struct Move {
    /// Mark that was placed.
    pub mark: Mark,
    /// Cell it was placed on (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }
}

/// Reasons a match refuses a move. The board is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum MatchError {
    /// The board itself rejected the move.
    #[display("{_0}")]
    Board(BoardError),

    /// The match has already finished.
    #[display("Game is already over ({_0})")]
    #[from(skip)]
    GameOver(#[error(not(source))] GameOutcome),

    /// It is not this mark's turn.
    #[display("It's not {_0}'s turn")]
    #[from(skip)]
    WrongPlayer(#[error(not(source))] Mark),
}
