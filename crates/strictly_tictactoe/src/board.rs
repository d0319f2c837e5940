//! The 3x3 board model.

use crate::rules;
use crate::{BoardError, GameOutcome, Mark, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order, so cell `row * 3 + col` sits at
/// `(row, col)`. The only mutation paths are [`Board::place_mark`],
/// [`Board::clear_cell`] and [`Board::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    fn check_index(index: usize) -> Result<usize, BoardError> {
        if index < CELLS {
            Ok(index)
        } else {
            Err(BoardError::OutOfRange { index })
        }
    }

    /// Returns the square at `index`.
    pub fn square(&self, index: usize) -> Result<Square, BoardError> {
        Ok(self.squares[Self::check_index(index)?])
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Returns whether the cell at `index` holds no mark.
    pub fn is_cell_empty(&self, index: usize) -> Result<bool, BoardError> {
        Ok(self.square(index)?.is_empty())
    }

    /// Places `mark` on the empty cell at `index`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` for an index past 8, `InvalidMove` if the cell is
    /// occupied. The board is left untouched in both cases.
    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        match self.square(index)? {
            Square::Empty => {
                self.squares[index] = Square::Occupied(mark);
                Ok(())
            }
            Square::Occupied(occupant) => Err(BoardError::InvalidMove { index, occupant }),
        }
    }

    /// Empties the cell at `index`, whatever it held.
    pub fn clear_cell(&mut self, index: usize) -> Result<(), BoardError> {
        self.squares[Self::check_index(index)?] = Square::Empty;
        Ok(())
    }

    /// Tries `mark` on the cell at `index`, runs `f` on the resulting board,
    /// then empties the cell again.
    ///
    /// Returns `None` without calling `f` when the cell cannot take a mark.
    pub(crate) fn with_trial_mark<T>(
        &mut self,
        index: usize,
        mark: Mark,
        f: impl FnOnce(&mut Self) -> T,
    ) -> Option<T> {
        self.place_mark(index, mark).ok()?;
        let value = f(self);
        self.squares[index] = Square::Empty;
        Some(value)
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Clearing board");
        self.squares = [Square::Empty; CELLS];
    }

    /// Returns the mark owning a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(&self.squares)
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.squares)
    }

    /// Derives the game outcome. A win takes precedence over a full board.
    pub fn outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(mark) => GameOutcome::won_by(mark),
            None if self.is_full() => GameOutcome::Draw,
            None => GameOutcome::Ongoing,
        }
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(|(i, _)| i)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// The mark whose turn it is, assuming X moved first and turns alternated.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Returns true if the X count exceeds the O count by zero or one.
    pub fn is_consistent(&self) -> bool {
        let (x, o) = (self.count(Mark::X), self.count(Mark::O));
        x == o || x == o + 1
    }
}

impl fmt::Display for Board {
    /// Renders the grid, showing each empty cell's index.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => char::from(b'0' + index as u8),
                    Square::Occupied(mark) => mark.symbol(),
                };
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, " {symbol} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Reads nine cells: `X`/`O` (any case) for marks and `.`, `-`, `_` or a
    /// space for empty cells. Row separators `|`, `/` and line breaks are
    /// skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(CELLS);
        for c in s.chars() {
            let square = match c {
                'x' | 'X' => Square::Occupied(Mark::X),
                'o' | 'O' => Square::Occupied(Mark::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                '|' | '/' | '\n' | '\r' | '\t' => continue,
                other => {
                    return Err(BoardError::Unparseable {
                        reason: format!("unexpected character {other:?}"),
                    });
                }
            };
            squares.push(square);
        }

        let squares: [Square; CELLS] =
            squares
                .try_into()
                .map_err(|cells: Vec<Square>| BoardError::Unparseable {
                    reason: format!("expected {CELLS} cells, found {}", cells.len()),
                })?;

        let board = Self { squares };
        if !board.is_consistent() {
            return Err(BoardError::Inconsistent {
                x: board.count(Mark::X),
                o: board.count(Mark::O),
            });
        }
        Ok(board)
    }
}
