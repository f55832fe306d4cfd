//! Static position evaluation.
//!
//! The evaluation is a weighted sum of three terms, always scored from the
//! perspective of a fixed player regardless of whose turn it is:
//!
//! 1. disc difference,
//! 2. corner control: `+corner_weight` per corner held, `-corner_weight` per
//!    corner held by the opponent,
//! 3. mobility difference times `mobility_weight`.
//!
//! Once few squares remain empty the corner and mobility terms stop predicting
//! the outcome, so positions with at most `disc_only_threshold` empties are
//! scored on disc difference alone.

use crate::board::Board;
use crate::constants::{CORNER_WEIGHT, DISC_ONLY_THRESHOLD, MOBILITY_WEIGHT};
use crate::disc::Player;
use crate::rules;
use crate::types::Score;

/// Weights of the linear evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Eval {
    /// Value of one corner.
    pub corner_weight: Score,
    /// Value of one unit of mobility difference.
    pub mobility_weight: Score,
    /// Empty-square count at or below which only discs are counted.
    pub disc_only_threshold: u32,
}

impl Default for Eval {
    fn default() -> Self {
        Eval {
            corner_weight: CORNER_WEIGHT,
            mobility_weight: MOBILITY_WEIGHT,
            disc_only_threshold: DISC_ONLY_THRESHOLD,
        }
    }
}

impl Eval {
    /// Evaluates `board` for `player`. Higher is better for `player`.
    pub fn evaluate(&self, board: &Board, player: Player) -> Score {
        let disc_diff = board.disc_difference(player);
        if board.empty_count() <= self.disc_only_threshold {
            return disc_diff;
        }

        disc_diff + self.corner_score(board, player) + self.mobility_score(board, player)
    }

    /// Corner control term.
    #[inline]
    pub fn corner_score(&self, board: &Board, player: Player) -> Score {
        let own = board.discs(player).corners().count() as Score;
        let theirs = board.discs(player.opponent()).corners().count() as Score;
        (own - theirs) * self.corner_weight
    }

    /// Mobility term.
    #[inline]
    pub fn mobility_score(&self, board: &Board, player: Player) -> Score {
        let own = rules::mobility(board, player) as Score;
        let theirs = rules::mobility(board, player.opponent()) as Score;
        (own - theirs) * self.mobility_weight
    }
}

/// Evaluates `board` for `player` with the default weights.
#[inline]
pub fn evaluate(board: &Board, player: Player) -> Score {
    Eval::default().evaluate(board, player)
}
