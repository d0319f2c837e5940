//! Pure tic-tac-toe game logic.
//!
//! - [`Board`] owns the nine cells, validates moves and derives the
//!   [`GameOutcome`].
//! - [`Minimax`] picks the computer's move with an exhaustive search to
//!   terminal positions.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, GameOutcome, Mark, choose_move};
//!
//! let mut board = Board::new();
//! board.place_mark(4, Mark::X)?;
//! assert_eq!(board.outcome(), GameOutcome::Ongoing);
//!
//! let reply = choose_move(&board, Mark::O, Mark::X).expect("board is not terminal");
//! board.place_mark(reply, Mark::O)?;
//! # Ok::<(), strictly_tictactoe::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod rules;
mod search;
mod types;

pub use board::{Board, CELLS};
pub use error::BoardError;
pub use search::{Minimax, MoveScore, Score, SearchResult, WIN_SCORE, choose_move};
pub use types::{GameOutcome, Mark, Square};
