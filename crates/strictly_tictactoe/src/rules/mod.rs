//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board's cells. The board model delegates to these
//! and the search engine reaches them through the board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, WinningLine, check_winner};
