//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Evaluation score, always from the searching side's fixed perspective.
pub type Score = i32;
