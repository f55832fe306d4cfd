//! Move-generation node counting.
//!
//! Counts the leaves of the game tree to a fixed depth. The totals from the
//! start position are well known, which makes this the main check that the
//! rules engine generates and applies moves correctly.
//!
//! A forced pass does not consume depth, and a finished game counts as one
//! leaf.

use crate::board::Board;
use crate::disc::Player;
use crate::rules;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Player::Black, depth)
}

/// Counts leaves `depth` plies below `board` with `player` to move.
pub fn perft(board: &Board, player: Player, depth: u32) -> u64 {
    let mut nodes = 0;
    let move_list = rules::legal_moves(board, player);

    if !move_list.is_empty() {
        for m in move_list.iter() {
            if depth <= 1 {
                nodes += 1;
            } else {
                let next = rules::play(board, m, player);
                nodes += perft(&next, player.opponent(), depth - 1);
            }
        }
    } else if rules::has_legal_move(board, player.opponent()) {
        nodes += perft(board, player.opponent(), depth);
    } else {
        nodes += 1;
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_shallow() {
        assert_eq!(perft_root(1), 4);
        assert_eq!(perft_root(2), 12);
        assert_eq!(perft_root(3), 56);
    }

    #[test]
    fn test_perft_finished_game_is_one_leaf() {
        let board = Board::from_bitboards(u64::MAX, 0u64);
        assert_eq!(perft(&board, Player::White, 3), 1);
    }
}
