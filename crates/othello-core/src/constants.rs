//! Global constants

use crate::types::{Depth, Score};

/// Infinity score for search bounds. Larger than any evaluation.
pub const SCORE_INF: Score = Score::MAX;

/// Default minimax depth in plies.
pub const DEFAULT_SEARCH_DEPTH: Depth = 5;

/// The strategist switches from the heuristic to minimax once the number of
/// empty squares drops to this value.
pub const LATE_GAME_THRESHOLD: u32 = 24;

/// Evaluation bonus for each corner held, penalty for each corner conceded.
pub const CORNER_WEIGHT: Score = 50;

/// Evaluation weight of one unit of mobility difference.
pub const MOBILITY_WEIGHT: Score = 5;

/// At or below this many empty squares the evaluation is the disc
/// difference alone.
pub const DISC_ONLY_THRESHOLD: u32 = 10;
