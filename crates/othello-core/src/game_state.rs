//! Game state management for Othello.
//!
//! This module provides the `GameState` struct which maintains the current
//! game position and handles the turn logic around it: validating and making
//! moves, recording forced passes, detecting the end of the game and undoing.

use crate::board::Board;
use crate::disc::Player;
use crate::error::{GameError, Result};
use crate::move_list::{Move, MoveList};
use crate::rules;
use crate::square::Square;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    BlackTurn,
    WhiteTurn,
    GameOver,
}

/// One history record: the move (`None` for a pass), the board before it and
/// the side that moved.
pub type HistoryEntry = (Option<Square>, Board, Player);

/// Represents the state of an Othello game.
///
/// A side left without legal moves passes automatically, so whenever the game
/// is not over the side to move has at least one legal move.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which player's turn it is to move.
    side_to_move: Player,
    history: Vec<HistoryEntry>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::Black)
    }

    /// Creates a new game state from an existing board position.
    ///
    /// If `side_to_move` has no legal move but the opponent does, the pass is
    /// recorded straight away.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which player moves next
    pub fn from_board(board: Board, side_to_move: Player) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            history: Vec::new(),
        };
        state.handle_forced_pass();
        state
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// Returns whose turn it is, or `GameOver`.
    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::GameOver
        } else {
            match self.side_to_move {
                Player::Black => Phase::BlackTurn,
                Player::White => Phase::WhiteTurn,
            }
        }
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> MoveList {
        rules::legal_moves(&self.board, self.side_to_move)
    }

    /// Places a disc for the side to move on `sq`.
    ///
    /// # Returns
    ///
    /// The move that was played, with its flips.
    ///
    /// # Errors
    ///
    /// * [`GameError::GameOver`] once neither side can move.
    /// * [`GameError::IllegalMove`] when `sq` is occupied or flips nothing.
    ///
    /// The state is unchanged on error.
    pub fn make_move(&mut self, sq: Square) -> Result<Move> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let flips = rules::flips_for(&self.board, sq, self.side_to_move);
        if flips.is_empty() {
            return Err(GameError::IllegalMove(sq));
        }

        let mv = Move::new(sq, flips);
        self.apply(&mv);
        Ok(mv)
    }

    /// Plays a move generated for the side to move, e.g. by the search.
    ///
    /// # Errors
    ///
    /// Same as [`make_move`](Self::make_move). A move whose flips do not
    /// match the current board is rejected as illegal.
    pub fn play(&mut self, mv: &Move) -> Result<()> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let flips = rules::flips_for(&self.board, mv.sq, self.side_to_move);
        if flips.is_empty() || flips != mv.flips {
            return Err(GameError::IllegalMove(mv.sq));
        }

        self.apply(mv);
        Ok(())
    }

    fn apply(&mut self, mv: &Move) {
        self.history
            .push((Some(mv.sq), self.board, self.side_to_move));

        self.board = rules::play(&self.board, mv, self.side_to_move);
        self.side_to_move = self.side_to_move.opponent();

        self.handle_forced_pass();
    }

    /// Records a pass when the side to move is stuck but the game goes on.
    fn handle_forced_pass(&mut self) {
        if rules::is_terminal(&self.board)
            || rules::has_legal_move(&self.board, self.side_to_move)
        {
            return;
        }

        tracing::debug!(player = %self.side_to_move, "forced pass");
        self.history.push((None, self.board, self.side_to_move));
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Checks if the game has ended: neither player has a legal move.
    ///
    /// A full board is the common case.
    pub fn is_game_over(&self) -> bool {
        rules::is_terminal(&self.board)
    }

    /// Returns the disc count for both players as `(black, white)`.
    pub fn score(&self) -> (u32, u32) {
        (
            self.board.count(Player::Black),
            self.board.count(Player::White),
        )
    }

    /// Returns the player with more discs once the game is over.
    ///
    /// `None` while the game is running or when it ended in a draw.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_game_over() {
            return None;
        }

        let (black, white) = self.score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns the last move played.
    ///
    /// `None` if the last history entry is a pass or nothing was played yet.
    pub fn last_move(&self) -> Option<Square> {
        self.history.last().and_then(|(sq, _, _)| *sq)
    }

    /// Returns the player who was forced to pass by the latest move, if any.
    pub fn last_pass(&self) -> Option<Player> {
        match self.history.last() {
            Some((None, _, side)) => Some(*side),
            _ => None,
        }
    }

    /// Returns a reference to the move history.
    ///
    /// Each entry holds the move (`None` for a pass), the board before it
    /// and the side that moved.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Undoes the last move.
    ///
    /// Forced passes recorded after that move are undone with it, so the
    /// player who made the move is to move again.
    ///
    /// # Errors
    ///
    /// [`GameError::NoMoveToUndo`] if no move has been played.
    pub fn undo(&mut self) -> Result<Square> {
        let Some((idx, sq)) = self
            .history
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, (sq, _, _))| sq.map(|sq| (i, sq)))
        else {
            return Err(GameError::NoMoveToUndo);
        };

        let (_, prev_board, prev_side) = self.history[idx];
        self.history.truncate(idx);
        self.board = prev_board;
        self.side_to_move = prev_side;
        Ok(sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Player::Black);
        assert_eq!(game.phase(), Phase::BlackTurn);
        assert!(!game.is_game_over());
        assert_eq!(game.score(), (2, 2));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_make_move() {
        let mut game = GameState::new();
        let mv = game.make_move(Square::D3).unwrap();
        assert_eq!(mv.sq, Square::D3);
        assert_eq!(mv.flips.as_slice(), &[Square::D4]);
        assert_eq!(game.side_to_move(), Player::White);
        assert_eq!(game.phase(), Phase::WhiteTurn);
    }

    #[test]
    fn test_illegal_move() {
        let mut game = GameState::new();
        let before = *game.board();

        assert_eq!(
            game.make_move(Square::A1),
            Err(GameError::IllegalMove(Square::A1))
        );
        assert_eq!(
            game.make_move(Square::D4),
            Err(GameError::IllegalMove(Square::D4))
        );
        assert_eq!(*game.board(), before);
        assert_eq!(game.side_to_move(), Player::Black);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_play_rejects_stale_move() {
        let mut game = GameState::new();
        let mv = game.legal_moves().first().cloned().unwrap();
        game.play(&mv).unwrap();
        // Same move again: the square is now occupied.
        assert_eq!(game.play(&mv), Err(GameError::IllegalMove(mv.sq)));
    }

    #[test]
    fn test_game_over() {
        let mut game = GameState::new();

        // Play through a game until it's over
        while !game.is_game_over() {
            let mv = game.legal_moves().first().cloned().unwrap();
            game.play(&mv).unwrap();
        }

        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.make_move(Square::A1), Err(GameError::GameOver));

        let (black, white) = game.score();
        match game.winner() {
            Some(Player::Black) => assert!(black > white),
            Some(Player::White) => assert!(white > black),
            None => assert_eq!(black, white),
        }
    }

    #[test]
    fn test_forced_pass_is_recorded() {
        // After Black takes A1, White is left without a move while Black
        // still has several.
        let board = Board::from_string(
            "-OX-----
             XO------
             X-------
             --------
             --------
             --------
             --------
             --------",
        );
        let mut game = GameState::from_board(board, Player::Black);

        game.make_move(Square::A1).unwrap();
        // White had no answer, so it is Black's turn again.
        assert_eq!(game.side_to_move(), Player::Black);
        assert_eq!(game.last_pass(), Some(Player::White));
        assert_eq!(game.last_move(), None);
        assert_eq!(game.history().len(), 2);

        // Undo skips the pass and restores the original position.
        assert_eq!(game.undo(), Ok(Square::A1));
        assert_eq!(*game.board(), board);
        assert_eq!(game.side_to_move(), Player::Black);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_from_board_passes_stuck_side() {
        let board = Board::from_string(
            "-OXXXXXX
             --------
             --------
             --------
             --------
             --------
             --------
             --------",
        );
        let game = GameState::from_board(board, Player::White);
        assert_eq!(game.side_to_move(), Player::Black);
        assert_eq!(game.last_pass(), Some(Player::White));
    }

    #[test]
    fn test_undo() {
        let mut game = GameState::new();
        let original_board = *game.board();
        let original_side = game.side_to_move();

        // Make a move
        game.make_move(Square::D3).unwrap();
        assert_ne!(*game.board(), original_board);
        assert_ne!(game.side_to_move(), original_side);

        // Undo the move
        assert_eq!(game.undo(), Ok(Square::D3));
        assert_eq!(*game.board(), original_board);
        assert_eq!(game.side_to_move(), original_side);
    }

    #[test]
    fn test_undo_multiple() {
        let mut game = GameState::new();

        game.make_move(Square::D3).unwrap();
        game.make_move(Square::C3).unwrap();
        game.make_move(Square::C4).unwrap();

        assert!(game.undo().is_ok());
        assert!(game.undo().is_ok());
        assert!(game.undo().is_ok());

        // Should be back to initial state
        assert_eq!(game.side_to_move(), Player::Black);
        assert_eq!(game.score(), (2, 2));
    }

    #[test]
    fn test_undo_when_empty() {
        let mut game = GameState::new();
        assert_eq!(game.undo(), Err(GameError::NoMoveToUndo));
        assert_eq!(game.side_to_move(), Player::Black);
    }

    #[test]
    fn test_last_move() {
        let mut game = GameState::new();
        assert_eq!(game.last_move(), None);

        game.make_move(Square::D3).unwrap();
        assert_eq!(game.last_move(), Some(Square::D3));

        game.make_move(Square::C3).unwrap();
        assert_eq!(game.last_move(), Some(Square::C3));
    }

    #[test]
    fn test_from_board() {
        let board = Board::new();
        let game = GameState::from_board(board, Player::White);

        assert_eq!(game.side_to_move(), Player::White);
        assert_eq!(*game.board(), board);
        assert_eq!(game.history().len(), 0);
    }

    #[test]
    fn test_history_complete_record() {
        let mut game = GameState::new();

        game.make_move(Square::D3).unwrap();
        game.make_move(Square::C3).unwrap();
        game.make_move(Square::C4).unwrap();

        let history = game.history();
        assert_eq!(history.len(), 3);

        assert_eq!(history[0].0, Some(Square::D3));
        assert_eq!(history[0].1, Board::new());
        assert_eq!(history[0].2, Player::Black);

        assert_eq!(history[1].0, Some(Square::C3));
        assert_eq!(history[1].2, Player::White);

        assert_eq!(history[2].0, Some(Square::C4));
        assert_eq!(history[2].2, Player::Black);
    }

    #[test]
    fn test_score_tracking() {
        let mut game = GameState::new();
        assert_eq!(game.score(), (2, 2));

        game.make_move(Square::D3).unwrap();
        assert_eq!(game.score(), (4, 1));
    }

    #[test]
    fn test_game_record_black_57_white_7() {
        let mut game = GameState::new();

        let moves_str = "e6f4c3c4d3d6e3d2f3f5c1c2b4b3a3e2c5c6f6g5g4a2a1a4f2h5g3f7h6h3f8f1e1d1h4h7a5g7h8g6g1g8b6e8b5g2d8b7a6h2e7d7c8a8a7b8c7h1b2b1";

        let moves: Vec<Square> = moves_str
            .as_bytes()
            .chunks(2)
            .map(|chunk| std::str::from_utf8(chunk).unwrap().parse().unwrap())
            .collect();

        for (i, &sq) in moves.iter().enumerate() {
            game.make_move(sq).unwrap_or_else(|e| {
                panic!("Failed to make move #{} ({}): {}", i + 1, sq, e);
            });
        }

        assert!(game.is_game_over(), "Game should be over after all moves");
        assert_eq!(game.score(), (57, 7));
        assert_eq!(game.winner(), Some(Player::Black));
        assert_eq!(game.last_move(), Some(Square::B1));

        let played: Vec<Square> = game.history().iter().filter_map(|(sq, _, _)| *sq).collect();
        assert_eq!(played, moves);

        // Every entry after a move or a pass belongs to the other side.
        for pair in game.history().windows(2) {
            assert_eq!(pair[1].2, pair[0].2.opponent());
        }
    }
}
