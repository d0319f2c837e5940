//! Board error types.

use crate::Mark;
use derive_more::{Display, Error};

/// Error raised when a board operation's preconditions do not hold.
///
/// The board is never mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Cell index outside 0-8.
    #[display("Cell index {index} is out of range (must be 0-8)")]
    OutOfRange {
        /// Offending index.
        index: usize,
    },

    /// Placement on a cell that already holds a mark.
    #[display("Cell {index} is already occupied by {occupant}")]
    InvalidMove {
        /// Target cell.
        index: usize,
        /// Mark already in the cell.
        occupant: Mark,
    },

    /// Board text could not be read.
    #[display("Cannot parse board: {reason}")]
    Unparseable {
        /// What was wrong with the text.
        reason: String,
    },

    /// Mark counts cannot come from alternating play with X first.
    #[display("Inconsistent board: {x} X marks and {o} O marks")]
    Inconsistent {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}
