//! Search result types.

use std::fmt;

use crate::move_list::Move;
use crate::types::Score;

/// Which strategy produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMethod {
    /// Corner first, then most flips.
    Heuristic,
    /// Depth-limited minimax with alpha-beta pruning.
    Minimax,
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMethod::Heuristic => write!(f, "heuristic"),
            SearchMethod::Minimax => write!(f, "minimax"),
        }
    }
}

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub method: SearchMethod,
    /// Minimax score of `best_move`. `None` for heuristic picks.
    pub score: Option<Score>,
    pub n_nodes: u64,
}

impl SearchResult {
    /// Creates a result for a heuristic pick.
    pub fn from_heuristic(best_move: Move) -> Self {
        Self {
            best_move,
            method: SearchMethod::Heuristic,
            score: None,
            n_nodes: 0,
        }
    }

    /// Creates a result for a minimax pick.
    pub fn from_minimax(best_move: Move, score: Score, n_nodes: u64) -> Self {
        Self {
            best_move,
            method: SearchMethod::Minimax,
            score: Some(score),
            n_nodes,
        }
    }
}
