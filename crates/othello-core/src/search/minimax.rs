//! Depth-limited minimax with alpha-beta pruning.
//!
//! Every node is scored from the fixed perspective of the searching player
//! (`ai`): nodes where `ai` is to move maximize, the others minimize. Bounds
//! travel down the call stack as plain values.
//!
//! # Cost
//!
//! Without pruning a search visits up to `b^depth` leaves for branching
//! factor `b`. The strategist only searches once at most 24 squares are empty,
//! so at depth 5 the ceiling is 24 * 23 * 22 * 21 * 20, about 5.1 million
//! leaves. Late-game mobility rarely exceeds a dozen moves, which puts the
//! realistic figure near 250 thousand before alpha-beta cuts it further.

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::disc::Player;
use crate::eval::Eval;
use crate::move_list::Move;
use crate::rules;
use crate::search::options::PassPolicy;
use crate::types::{Depth, Score};

/// Minimax search state: the evaluator, the pass policy and a node counter.
pub struct Minimax<'a> {
    eval: &'a Eval,
    pass_policy: PassPolicy,
    /// Number of nodes visited so far.
    pub n_nodes: u64,
}

impl<'a> Minimax<'a> {
    pub fn new(eval: &'a Eval, pass_policy: PassPolicy) -> Minimax<'a> {
        Minimax {
            eval,
            pass_policy,
            n_nodes: 0,
        }
    }

    /// Searches every root move of `player` and returns the best one with its
    /// score.
    ///
    /// Each root move is searched with a fresh `(-SCORE_INF, SCORE_INF)`
    /// window at `depth - 1` with the opponent to move. Only a strictly
    /// greater score replaces the current best, so ties keep the earliest
    /// move in scan order.
    ///
    /// # Returns
    ///
    /// `None` when `player` has no legal move.
    pub fn minimax_move(
        &mut self,
        board: &Board,
        player: Player,
        depth: Depth,
    ) -> Option<(Move, Score)> {
        let mut best: Option<(Move, Score)> = None;
        let child_depth = depth.saturating_sub(1);

        for mv in rules::legal_moves(board, player) {
            let next = rules::play(board, &mv, player);
            let score = self.minimax(&next, child_depth, false, player, -SCORE_INF, SCORE_INF);
            tracing::trace!(sq = %mv.sq, score, "root move");

            if best.as_ref().is_none_or(|(_, best_score)| score > *best_score) {
                best = Some((mv, score));
            }
        }

        best
    }

    /// Scores `board` for `ai`.
    ///
    /// `maximizing` tells whose turn it is: `ai` when `true`, the opponent
    /// otherwise. The node is a leaf when `depth` is zero or neither side can
    /// move. A side without moves passes: the same board is searched with
    /// the other side to move.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: Depth,
        maximizing: bool,
        ai: Player,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.n_nodes += 1;

        if depth == 0 || rules::is_terminal(board) {
            return self.eval.evaluate(board, ai);
        }

        let side = if maximizing { ai } else { ai.opponent() };
        let moves = rules::legal_moves(board, side);

        if moves.is_empty() {
            let next_depth = match self.pass_policy {
                PassPolicy::ConsumeDepth => depth - 1,
                PassPolicy::KeepDepth => depth,
            };
            return self.minimax(board, next_depth, !maximizing, ai, alpha, beta);
        }

        if maximizing {
            let mut best = -SCORE_INF;
            for mv in &moves {
                let next = rules::play(board, mv, side);
                let score = self.minimax(&next, depth - 1, false, ai, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = SCORE_INF;
            for mv in &moves {
                let next = rules::play(board, mv, side);
                let score = self.minimax(&next, depth - 1, true, ai, alpha, beta);
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// Returns the best move of `player` at `depth` with the default evaluation
/// and pass policy.
pub fn minimax_move(board: &Board, player: Player, depth: Depth) -> Option<(Move, Score)> {
    let eval = Eval::default();
    Minimax::new(&eval, PassPolicy::default()).minimax_move(board, player, depth)
}

/// Scores `board` for `ai` with the default evaluation and pass policy.
pub fn minimax(
    board: &Board,
    depth: Depth,
    maximizing: bool,
    ai: Player,
    alpha: Score,
    beta: Score,
) -> Score {
    let eval = Eval::default();
    Minimax::new(&eval, PassPolicy::default()).minimax(board, depth, maximizing, ai, alpha, beta)
}
