//! Strictly Minimax - tic-tac-toe against an exhaustive minimax engine
//!
//! The game rules and the search live in [`strictly_tictactoe`]; this crate
//! drives them.
//!
//! # Architecture
//!
//! - **Match**: human versus computer with turn order and reset
//! - **Play-out**: the engine playing both sides
//! - **Config**: TOML match settings
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{GameOutcome, Match, MatchConfig};
//!
//! # fn example() -> Result<(), strictly_minimax::MatchError> {
//! let mut game = Match::new(&MatchConfig::default());
//! game.start()?;
//! let turn = game.play(4)?;
//! assert_eq!(turn.outcome, GameOutcome::Ongoing);
//! assert!(turn.computer.is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod game;
mod play_out;

// Crate-level exports - Match
pub use action::{MatchError, Move};
pub use game::{Match, Turn};
pub use play_out::{PlayOut, play_out};

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Engine types
pub use strictly_tictactoe::{
    Board, BoardError, CELLS, GameOutcome, Mark, Minimax, MoveScore, Score, SearchResult, Square,
    WIN_SCORE, choose_move,
};
