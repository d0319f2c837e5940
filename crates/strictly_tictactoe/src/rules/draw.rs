//! Draw detection logic for tic-tac-toe.

use crate::Square;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
pub fn is_full(squares: &[Square; 9]) -> bool {
    squares.iter().all(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::Mark;

    fn parse(cells: &str) -> [Square; 9] {
        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(cells.chars()) {
            *square = match c {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                _ => Square::Empty,
            };
        }
        squares
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&[Square::Empty; 9]));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&parse("XOXOXOXO.")));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let squares = parse("XOXOXXOXO");
        assert!(is_full(&squares));
        assert_eq!(check_winner(&squares), None);
    }

    #[test]
    fn test_full_board_with_winner() {
        // X X X / O O X / X O O
        let squares = parse("XXXOOXXOO");
        assert!(is_full(&squares));
        assert_eq!(check_winner(&squares), Some(Mark::X));
    }
}
