//! Computer-versus-computer play.

use crate::action::{MatchError, Move};
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Board, BoardError, GameOutcome, Mark, Minimax};
use tracing::{debug, info, instrument};

/// A finished game between two searchers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOut {
    /// Moves made from the starting board, in order.
    pub moves: Vec<Move>,
    /// Final board.
    pub board: Board,
    /// Final outcome.
    pub outcome: GameOutcome,
}

/// Plays `board` to the end with both sides using the minimax search.
///
/// Each ply searches for the mark that is due to move, with the other mark as
/// its opponent.
///
/// # Errors
///
/// `Board(Inconsistent)` if the mark counts on `board` cannot arise from
/// alternating play.
#[instrument(skip(board))]
pub fn play_out(board: &Board) -> Result<PlayOut, MatchError> {
    if !board.is_consistent() {
        return Err(BoardError::Inconsistent {
            x: board.count(Mark::X),
            o: board.count(Mark::O),
        }
        .into());
    }

    let mut board = *board;
    let mut moves = Vec::new();

    while let Some(index) = Minimax::for_board(&board).choose_move(&board) {
        let mov = Move::new(board.next_mark(), index);
        board.place_mark(mov.index, mov.mark)?;
        debug!(%mov, "Engine moved");
        moves.push(mov);
    }

    let outcome = board.outcome();
    info!(%outcome, plies = moves.len(), "Play-out finished");
    Ok(PlayOut {
        moves,
        board,
        outcome,
    })
}
