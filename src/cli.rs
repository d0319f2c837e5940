//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Board;

/// Strictly Minimax - tic-tac-toe against an exhaustive minimax engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe analysis and play against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score every move for the side to move and show the engine's choice
    Analyze {
        /// Nine cells in row-major order, e.g. "XX.O....." or "XX./O../..."
        board: Board,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides until the game ends
    PlayOut {
        /// Starting board (defaults to empty)
        #[arg(short, long)]
        board: Option<Board>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play the listed human moves against the computer
    Replay {
        /// Cells (0-8) the human plays, in order
        #[arg(required = true)]
        moves: Vec<usize>,

        /// Print the turns as JSON
        #[arg(long)]
        json: bool,
    },
}
