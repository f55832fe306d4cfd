//! Search configuration.

use crate::constants::{
    CORNER_WEIGHT, DEFAULT_SEARCH_DEPTH, DISC_ONLY_THRESHOLD, LATE_GAME_THRESHOLD,
    MOBILITY_WEIGHT,
};
use crate::eval::Eval;
use crate::types::{Depth, Score};

/// How minimax accounts for a forced pass inside the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PassPolicy {
    /// A pass costs one ply of depth, like a real move.
    #[default]
    ConsumeDepth,
    /// A pass only switches sides; the remaining depth is unchanged.
    KeepDepth,
}

/// Options for the AI strategist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Minimax depth in plies.
    pub depth: Depth,
    /// Minimax is used once the number of empty squares is at or below this.
    pub late_game_threshold: u32,
    /// Evaluation weight of one corner.
    pub corner_weight: Score,
    /// Evaluation weight of one unit of mobility difference.
    pub mobility_weight: Score,
    /// Empty-square count at or below which only discs are evaluated.
    pub disc_only_threshold: u32,
    pub pass_policy: PassPolicy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            depth: DEFAULT_SEARCH_DEPTH,
            late_game_threshold: LATE_GAME_THRESHOLD,
            corner_weight: CORNER_WEIGHT,
            mobility_weight: MOBILITY_WEIGHT,
            disc_only_threshold: DISC_ONLY_THRESHOLD,
            pass_policy: PassPolicy::default(),
        }
    }
}

impl SearchOptions {
    /// Builds the evaluator described by these options.
    pub fn eval(&self) -> Eval {
        Eval {
            corner_weight: self.corner_weight,
            mobility_weight: self.mobility_weight,
            disc_only_threshold: self.disc_only_threshold,
        }
    }
}
