//! Othello rules: flip computation, legal moves and terminal detection.
//!
//! Every function here is pure. Boards are taken by reference and derived
//! positions are returned as new values.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::disc::Player;
use crate::move_list::{FlipList, Move, MoveList};
use crate::square::{BOARD_SIZE, Square};

/// The eight compass directions as `(row, col)` steps, in flip-collection
/// order: N, S, W, E, NW, NE, SW, SE.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Returns `true` iff both coordinates lie in `[0, 7]`.
#[inline]
pub const fn is_on_board(row: i32, col: i32) -> bool {
    row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
}

/// Computes the discs `player` would capture by placing a disc on `sq`.
///
/// For each direction the walk collects consecutive opponent discs; the run
/// is kept only when it is closed by one of `player`'s own discs. Runs that
/// reach an empty square or the edge are discarded.
///
/// # Returns
///
/// The captured squares grouped by direction (see [`DIRECTIONS`]), nearest
/// first. Empty when `sq` is occupied or nothing is captured, i.e. exactly
/// when the move is illegal.
pub fn flips_for(board: &Board, sq: Square, player: Player) -> FlipList {
    let mut flips = FlipList::new();
    if !board.is_square_empty(sq) {
        return flips;
    }

    let own = board.discs(player);
    let opponent = board.discs(player.opponent());

    for (dr, dc) in DIRECTIONS {
        let run_start = flips.len();
        let mut cursor = sq.offset(dr, dc);
        while let Some(cur) = cursor
            && opponent.contains(cur)
        {
            flips.push(cur);
            cursor = cur.offset(dr, dc);
        }

        let closed = matches!(cursor, Some(end) if own.contains(end));
        if !closed {
            flips.truncate(run_start);
        }
    }

    flips
}

/// Returns the squares where `player` may legally move, as a bitboard.
#[inline]
pub fn legal_move_squares(board: &Board, player: Player) -> Bitboard {
    board
        .discs(player)
        .get_moves(board.discs(player.opponent()))
}

/// Generates every legal move of `player` in row-major scan order.
pub fn legal_moves(board: &Board, player: Player) -> MoveList {
    let mut moves = MoveList::new();
    for sq in legal_move_squares(board, player) {
        let flips = flips_for(board, sq, player);
        debug_assert!(!flips.is_empty(), "move generator disagrees on {sq}");
        if !flips.is_empty() {
            moves.push(Move::new(sq, flips));
        }
    }
    moves
}

/// Returns `true` if `player` has at least one legal move.
///
/// Does not build the move list.
#[inline]
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    !legal_move_squares(board, player).is_empty()
}

/// Returns the number of legal moves available to `player`.
#[inline]
pub fn mobility(board: &Board, player: Player) -> u32 {
    legal_move_squares(board, player).count()
}

/// Returns `true` when neither player can move.
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, Player::Black) && !has_legal_move(board, Player::White)
}

/// Places `player`'s disc on `sq` and turns every square in `flips`.
///
/// The caller guarantees that `flips` is exactly `flips_for(board, sq, player)`;
/// nothing is re-validated. A stale or fabricated flip list yields a board that
/// does not follow the rules.
#[inline]
pub fn apply_move(board: &Board, sq: Square, player: Player, flips: &[Square]) -> Board {
    debug_assert!(board.is_square_empty(sq), "{sq} is already occupied");
    let flipped: Bitboard = flips.iter().copied().collect();
    board.make_move_with_flipped(player, flipped, sq)
}

/// Applies a generated [`Move`] for `player`.
#[inline]
pub fn play(board: &Board, mv: &Move, player: Player) -> Board {
    apply_move(board, mv.sq, player, &mv.flips)
}
