//! Error types for the Othello core crate.

use thiserror::Error;

use crate::square::Square;

/// Error returned when a string cannot be parsed as a square.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    #[error("Invalid square format: must be 2 characters (e.g., 'a1')")]
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    #[error("Invalid file '{0}': must be a-h or A-H")]
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    #[error("Invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
}

/// Errors raised by [`GameState`](crate::game_state::GameState) operations.
///
/// None of these are faults: the game state is left untouched and the caller
/// is expected to report the problem and prompt again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The square is occupied or placing a disc there flips nothing.
    #[error("Cannot place a disc on {0}")]
    IllegalMove(Square),

    /// A move was submitted after both players ran out of moves.
    #[error("The game is already over")]
    GameOver,

    /// `undo` was requested with an empty history.
    #[error("No moves to undo")]
    NoMoveToUndo,
}

/// Convenience alias for results carrying a [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_display() {
        assert_eq!(
            SquareError::InvalidFormat.to_string(),
            "Invalid square format: must be 2 characters (e.g., 'a1')"
        );
        assert_eq!(
            SquareError::InvalidFile('z').to_string(),
            "Invalid file 'z': must be a-h or A-H"
        );
        assert_eq!(
            SquareError::InvalidRank('9').to_string(),
            "Invalid rank '9': must be 1-8"
        );
    }

    #[test]
    fn test_game_error_display() {
        assert_eq!(
            GameError::IllegalMove(Square::D1).to_string(),
            "Cannot place a disc on d1"
        );
        assert_eq!(GameError::GameOver.to_string(), "The game is already over");
        assert_eq!(GameError::NoMoveToUndo.to_string(), "No moves to undo");
    }
}
