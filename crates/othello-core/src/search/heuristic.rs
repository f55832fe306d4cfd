//! Early and midgame move selection without lookahead.

use crate::board::Board;
use crate::disc::Player;
use crate::move_list::Move;
use crate::rules;

/// Picks a move by simple priorities:
///
/// 1. the first corner move in scan order,
/// 2. otherwise the move flipping the most discs, earliest on ties.
///
/// # Returns
///
/// `None` when `player` has no legal move.
pub fn heuristic_move(board: &Board, player: Player) -> Option<Move> {
    let moves = rules::legal_moves(board, player);

    if let Some(corner) = moves.iter().find(|mv| mv.is_corner()) {
        return Some(corner.clone());
    }

    let mut best: Option<&Move> = None;
    for mv in &moves {
        if best.is_none_or(|b| mv.flip_count() > b.flip_count()) {
            best = Some(mv);
        }
    }
    best.cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_no_move_returns_none() {
        let board = Board::from_bitboards(u64::MAX, 0u64);
        assert!(heuristic_move(&board, Player::White).is_none());
    }

    #[test]
    fn test_corner_beats_larger_capture() {
        // E5 flips three discs and comes first in scan order, H8 flips one.
        // The corner capture run itself is checked by
        // rules::tests::test_corner_capture_run.
        let board = Board::from_string(
            "--------
             --------
             --------
             --------
             XOOO----
             --------
             --------
             -----XO-",
        );
        let moves = rules::legal_moves(&board, Player::Black);
        assert_eq!(moves.find(Square::E5).map(Move::flip_count), Some(3));
        assert_eq!(moves.find(Square::H8).map(Move::flip_count), Some(1));

        let mv = heuristic_move(&board, Player::Black).unwrap();
        assert_eq!(mv.sq, Square::H8);
    }

    #[test]
    fn test_most_flips_wins() {
        let board = Board::from_string(
            "--------
             --------
             XO------
             --------
             XOOO----
             --------
             --------
             --------",
        );
        let mv = heuristic_move(&board, Player::Black).unwrap();
        assert_eq!(mv.sq, Square::E5);
        assert_eq!(mv.flip_count(), 3);
    }

    #[test]
    fn test_tie_goes_to_first_in_scan_order() {
        let board = Board::from_string(
            "--------
             --------
             XO------
             --------
             --------
             XO------
             --------
             --------",
        );
        let mv = heuristic_move(&board, Player::Black).unwrap();
        assert_eq!(mv.sq, Square::C3);
    }

    #[test]
    fn test_opening_picks_first_move() {
        let mv = heuristic_move(&Board::new(), Player::Black).unwrap();
        assert_eq!(mv.sq, Square::D3);
    }
}
