//! Win detection logic for tic-tac-toe.

use crate::{Mark, Square};

/// Three cell indices that win when owned by one mark.
pub type WinningLine = [usize; 3];

/// Every winning line, rows first, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner among the given cells.
///
/// Returns the mark owning the first complete line in [`WINNING_LINES`]
/// order, `None` otherwise.
pub fn check_winner(squares: &[Square; 9]) -> Option<Mark> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = squares[a].mark()?;
        (squares[b] == squares[a] && squares[c] == squares[a]).then_some(mark)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(marks: &[(usize, Mark)]) -> [Square; 9] {
        let mut squares = [Square::Empty; 9];
        for &(i, mark) in marks {
            squares[i] = Square::Occupied(mark);
        }
        squares
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&[Square::Empty; 9]), None);
    }

    #[test]
    fn test_winner_top_row() {
        let squares = with(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert_eq!(check_winner(&squares), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let squares = with(&[(1, Mark::O), (4, Mark::O), (7, Mark::O)]);
        assert_eq!(check_winner(&squares), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let squares = with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        assert_eq!(check_winner(&squares), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let squares = with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(check_winner(&squares), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let marks: Vec<_> = line.iter().map(|&i| (i, Mark::X)).collect();
            assert_eq!(check_winner(&with(&marks)), Some(Mark::X), "line {line:?}");
        }
    }
}
