//! A human-versus-computer match.
//!
//! [`Match`] is the caller side of the engine: it enforces turn order,
//! applies the human's move, checks the outcome and lets the computer reply
//! while the game is still open.

use crate::action::{MatchError, Move};
use crate::config::MatchConfig;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Board, GameOutcome, Mark, Minimax};
use tracing::{debug, info, instrument};

/// What happened during one call to [`Match::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Cell the human played.
    pub human: usize,
    /// Cell the computer answered with, if the game was still open.
    pub computer: Option<usize>,
    /// Outcome after both moves.
    pub outcome: GameOutcome,
}

/// Tic-tac-toe match between a human and the minimax engine.
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    human: Mark,
    engine: Minimax,
    history: Vec<Move>,
}

impl Match {
    /// Creates a match on an empty board with marks assigned by `config`.
    ///
    /// Call [`Match::start`] before the first human move so the computer can
    /// open when it holds X.
    #[instrument(skip(config), fields(computer = %config.computer_mark()))]
    pub fn new(config: &MatchConfig) -> Self {
        let computer = *config.computer_mark();
        Self {
            board: Board::new(),
            human: config.human_mark(),
            engine: Minimax::new(computer, computer.opponent()),
            history: Vec::new(),
        }
    }

    /// Lets the computer open the game if it moves first.
    ///
    /// Returns the cell it played, or `None` when it is the human's turn.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<Option<usize>, MatchError> {
        if self.to_move() == Some(self.computer()) {
            self.computer_move()
        } else {
            Ok(None)
        }
    }

    /// Plays the human's move at `index` and the computer's reply.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has finished, `WrongPlayer` if the computer
    /// is due to move, and the board's `OutOfRange` / `InvalidMove`. Nothing
    /// is changed when an error is returned.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn play(&mut self, index: usize) -> Result<Turn, MatchError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(MatchError::GameOver(outcome));
        }
        if self.board.next_mark() != self.human {
            return Err(MatchError::WrongPlayer(self.human));
        }

        self.apply(Move::new(self.human, index))?;

        let computer = if self.outcome().is_terminal() {
            None
        } else {
            self.computer_move()?
        };

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game over");
        }
        Ok(Turn {
            human: index,
            computer,
            outcome,
        })
    }

    fn computer_move(&mut self) -> Result<Option<usize>, MatchError> {
        let choice = self.engine.choose_move(&self.board);
        if let Some(index) = choice {
            self.apply(Move::new(self.computer(), index))?;
        }
        Ok(choice)
    }

    fn apply(&mut self, mov: Move) -> Result<(), MatchError> {
        self.board.place_mark(mov.index, mov.mark)?;
        debug!(%mov, "Move applied");
        self.history.push(mov);
        Ok(())
    }

    /// Clears the board and history, then lets the computer open if it
    /// holds X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<Option<usize>, MatchError> {
        self.board.reset();
        self.history.clear();
        self.start()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns every move played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// Mark played by the human.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Mark played by the computer.
    pub fn computer(&self) -> Mark {
        *self.engine.maximizer()
    }

    /// Mark due to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Mark> {
        (!self.outcome().is_terminal()).then(|| self.board.next_mark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::BoardError;

    #[test]
    fn test_human_x_moves_first() {
        let mut game = Match::new(&MatchConfig::default());
        assert_eq!(game.start(), Ok(None));
        assert_eq!(game.to_move(), Some(Mark::X));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_computer_x_opens() {
        let mut game = Match::new(&MatchConfig::new(Mark::X));
        let opening = game.start().unwrap();
        // Every opening draws with best play, so the lowest cell wins the tie.
        assert_eq!(opening, Some(0));
        assert_eq!(game.to_move(), Some(Mark::O));
        assert_eq!(game.history(), &[Move::new(Mark::X, 0)]);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Match::new(&MatchConfig::default());
        game.play(4).unwrap();
        let board = *game.board();
        let moves = game.history().len();

        assert_eq!(
            game.play(4),
            Err(MatchError::Board(BoardError::InvalidMove {
                index: 4,
                occupant: Mark::X
            }))
        );
        assert_eq!(
            game.play(9),
            Err(MatchError::Board(BoardError::OutOfRange { index: 9 }))
        );
        assert_eq!(*game.board(), board);
        assert_eq!(game.history().len(), moves);
    }

    #[test]
    fn test_wrong_player_before_computer_opens() {
        let mut game = Match::new(&MatchConfig::new(Mark::X));
        assert_eq!(game.play(4), Err(MatchError::WrongPlayer(Mark::O)));
    }
}
