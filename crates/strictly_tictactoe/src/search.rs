//! Full-depth minimax search.
//!
//! Every continuation is explored down to a terminal board; there is no
//! pruning and no heuristic cut-off. Terminal scores are adjusted by the ply
//! at which they were reached, so a quicker win outranks a slower one and a
//! slower loss outranks a quicker one.
//!
//! Root moves are tried in ascending cell order and only a strictly greater
//! score replaces the current best, so the lowest index wins every tie.

use crate::board::CELLS;
use crate::{Board, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Minimax evaluation of a position, from the maximizing mark's side.
pub type Score = i32;

/// Base value of a win before depth adjustment.
pub const WIN_SCORE: Score = 10;

/// Score of one candidate move at the root of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    /// Cell the maximizing mark would play.
    pub index: usize,
    /// Value of the position after that move.
    pub score: Score,
}

/// Outcome of a search from one position.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchResult {
    /// Value of the position for the maximizing mark.
    score: Score,
    /// Chosen cell, `None` when the position is already terminal.
    best_move: Option<usize>,
    /// Every root move in ascending cell order with its score.
    root_scores: Vec<MoveScore>,
}

/// Minimax searcher for one pair of marks.
///
/// `maximizer` is the computer's mark: its wins score positive. `minimizer`
/// is the opponent's: its wins score negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Minimax {
    maximizer: Mark,
    minimizer: Mark,
}

impl Minimax {
    /// Creates a searcher that plays `computer` against `opponent`.
    pub fn new(computer: Mark, opponent: Mark) -> Self {
        debug_assert_ne!(computer, opponent, "search needs two distinct marks");
        Self {
            maximizer: computer,
            minimizer: opponent,
        }
    }

    /// Creates a searcher maximizing for whichever mark is to move on `board`.
    pub fn for_board(board: &Board) -> Self {
        let mark = board.next_mark();
        Self::new(mark, mark.opponent())
    }

    /// Returns the best cell for the maximizing mark, or `None` if the board
    /// is terminal.
    pub fn choose_move(&self, board: &Board) -> Option<usize> {
        self.search(board).best_move
    }

    /// Scores every legal move from `board` and picks the best.
    ///
    /// The caller's board is not touched: the search runs on a private copy
    /// that is restored after every trial move.
    #[instrument(skip(self, board), fields(computer = %self.maximizer))]
    pub fn search(&self, board: &Board) -> SearchResult {
        let mut work = *board;

        if work.outcome().is_terminal() {
            let score = self.evaluate(&mut work, 0, true);
            debug!(score, "Position is terminal, no move to make");
            return SearchResult {
                score,
                best_move: None,
                root_scores: Vec::new(),
            };
        }

        let mut best_score = Score::MIN;
        let mut best_move = None;
        let mut root_scores = Vec::with_capacity(CELLS);

        for index in 0..CELLS {
            let Some(score) =
                work.with_trial_mark(index, self.maximizer, |b| self.evaluate(b, 1, false))
            else {
                continue;
            };
            trace!(index, score, "Scored root move");
            root_scores.push(MoveScore { index, score });

            if score > best_score {
                best_score = score;
                best_move = Some(index);
            }
        }

        debug!(?best_move, score = best_score, "Search complete");
        SearchResult {
            score: best_score,
            best_move,
            root_scores,
        }
    }

    /// Recursively values `board` with `depth` plies already played.
    ///
    /// `maximizing` says whose ply comes next: the maximizer's when true,
    /// the minimizer's otherwise. `board` is restored before returning.
    pub fn evaluate(&self, board: &mut Board, depth: Score, maximizing: bool) -> Score {
        if let Some(winner) = board.winner() {
            return if winner == self.minimizer {
                -WIN_SCORE + depth
            } else {
                WIN_SCORE - depth
            };
        }
        if board.is_full() {
            return 0;
        }

        let (mark, mut best) = if maximizing {
            (self.maximizer, Score::MIN)
        } else {
            (self.minimizer, Score::MAX)
        };

        for index in 0..CELLS {
            let Some(score) =
                board.with_trial_mark(index, mark, |b| self.evaluate(b, depth + 1, !maximizing))
            else {
                continue;
            };
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

/// Picks the computer's move on `board`.
///
/// Shorthand for [`Minimax::new`] followed by [`Minimax::choose_move`].
pub fn choose_move(board: &Board, computer_mark: Mark, opponent_mark: Mark) -> Option<usize> {
    Minimax::new(computer_mark, opponent_mark).choose_move(board)
}
