//! AI strategist.
//!
//! Chooses between two strategies by game phase: a cheap heuristic while the
//! board is open, then minimax once few empty squares remain and lookahead
//! becomes affordable.

pub mod heuristic;
pub mod minimax;
pub mod options;
pub mod search_result;

use crate::board::Board;
use crate::disc::Player;
use crate::eval::Eval;
use crate::search::heuristic::heuristic_move;
use crate::search::minimax::Minimax;
use crate::search::options::SearchOptions;
use crate::search::search_result::SearchResult;

pub use options::PassPolicy;
pub use search_result::SearchMethod;

/// Main search engine structure.
#[derive(Clone, Debug)]
pub struct Search {
    options: SearchOptions,
    eval: Eval,
}

impl Default for Search {
    fn default() -> Self {
        Search::new(&SearchOptions::default())
    }
}

impl Search {
    /// Creates a new search engine with the given options.
    pub fn new(options: &SearchOptions) -> Search {
        Search {
            options: options.clone(),
            eval: options.eval(),
        }
    }

    /// Returns the options this engine was built with.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Chooses a move for `ai`.
    ///
    /// Minimax is used once the number of empty squares is at most
    /// `late_game_threshold`, the heuristic before that.
    ///
    /// # Returns
    ///
    /// `None` when `ai` has no legal move and must pass.
    pub fn choose_move(&self, board: &Board, ai: Player) -> Option<SearchResult> {
        let n_empties = board.empty_count();

        if n_empties > self.options.late_game_threshold {
            tracing::debug!(%ai, n_empties, "using heuristic strategy");
            return heuristic_move(board, ai).map(SearchResult::from_heuristic);
        }

        tracing::debug!(%ai, n_empties, depth = self.options.depth, "using minimax");
        let mut minimax = Minimax::new(&self.eval, self.options.pass_policy);
        let (best_move, score) = minimax.minimax_move(board, ai, self.options.depth)?;
        tracing::debug!(
            sq = %best_move.sq,
            score,
            n_nodes = minimax.n_nodes,
            "minimax search finished"
        );
        Some(SearchResult::from_minimax(best_move, score, minimax.n_nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_opening_uses_heuristic() {
        let search = Search::default();
        let result = search.choose_move(&Board::new(), Player::Black).unwrap();
        assert_eq!(result.method, SearchMethod::Heuristic);
        assert_eq!(result.score, None);
        assert_eq!(result.best_move.sq, Square::D3);
    }

    #[test]
    fn test_threshold_switches_to_minimax() {
        let options = SearchOptions {
            depth: 2,
            late_game_threshold: 60,
            ..SearchOptions::default()
        };
        let search = Search::new(&options);
        let result = search.choose_move(&Board::new(), Player::Black).unwrap();
        assert_eq!(result.method, SearchMethod::Minimax);
        assert!(result.score.is_some());
        assert!(result.n_nodes > 4);
    }

    #[test]
    fn test_no_move_returns_none() {
        let board = Board::from_bitboards(u64::MAX >> 1, 0u64);
        let search = Search::default();
        assert!(search.choose_move(&board, Player::Black).is_none());
        assert!(search.choose_move(&board, Player::White).is_none());
    }

    #[test]
    fn test_options_flow_into_eval() {
        let options = SearchOptions {
            corner_weight: 30,
            pass_policy: PassPolicy::KeepDepth,
            ..SearchOptions::default()
        };
        let search = Search::new(&options);
        assert_eq!(search.eval.corner_weight, 30);
        assert_eq!(search.options().pass_policy, PassPolicy::KeepDepth);
    }
}
