//! Move values produced by the rules engine.

use arrayvec::ArrayVec;
use std::slice;

use crate::bitboard::Bitboard;
use crate::square::Square;

/// Maximum number of legal moves possible in an Othello position.
const MAX_MOVES: usize = 34;

/// Upper bound on the discs a single move can flip: the eight rays leaving
/// a central square cover 27 cells.
pub const MAX_FLIPS: usize = 27;

/// Ordered list of captured squares, grouped by direction, nearest first.
pub type FlipList = ArrayVec<Square, MAX_FLIPS>;

/// A candidate placement and the discs it captures.
///
/// A move is only meaningful for the board and player it was generated for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// Opponent discs flipped by this move, in capture order.
    pub flips: FlipList,
}

impl Move {
    /// Creates a new move with the specified square and flipped discs.
    #[inline]
    pub fn new(sq: Square, flips: FlipList) -> Move {
        debug_assert!(!flips.is_empty(), "Move must flip at least one disc");
        Move { sq, flips }
    }

    /// Returns the number of discs this move flips.
    #[inline]
    pub fn flip_count(&self) -> usize {
        self.flips.len()
    }

    /// Returns the flipped discs as a bitboard.
    #[inline]
    pub fn flipped(&self) -> Bitboard {
        self.flips.iter().copied().collect()
    }

    /// Returns `true` if the move is played on a corner.
    #[inline]
    pub fn is_corner(&self) -> bool {
        self.sq.is_corner()
    }
}

/// All legal moves of one player in one position, in row-major scan order.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    moves: ArrayVec<Move, MAX_MOVES>,
}

impl MoveList {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> MoveList {
        MoveList::default()
    }

    /// Appends a move. Callers push in scan order.
    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.moves.len() < self.moves.capacity());
        self.moves.push(mv);
    }

    /// Returns the number of legal moves in this position.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if there is no legal move.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the first move in scan order, if any exists.
    #[inline]
    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    /// Returns the move played on `sq`, if it is legal.
    pub fn find(&self, sq: Square) -> Option<&Move> {
        self.moves.iter().find(|mv| mv.sq == sq)
    }

    /// Returns an iterator over all moves in scan order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns the destination squares as a bitboard.
    pub fn squares(&self) -> Bitboard {
        self.moves.iter().map(|mv| mv.sq).collect()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = arrayvec::IntoIter<Move, MAX_MOVES>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(sq: Square, flips: &[Square]) -> Move {
        Move::new(sq, flips.iter().copied().collect())
    }

    #[test]
    fn test_move_accessors() {
        let m = mv(Square::A1, &[Square::B2, Square::C3]);
        assert_eq!(m.flip_count(), 2);
        assert!(m.is_corner());
        assert_eq!(m.flipped(), Square::B2.bitboard() | Square::C3.bitboard());
    }

    #[test]
    fn test_move_list_find_and_squares() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        assert!(list.first().is_none());

        list.push(mv(Square::D3, &[Square::D4]));
        list.push(mv(Square::C4, &[Square::D4]));

        assert_eq!(list.count(), 2);
        assert_eq!(list.first().map(|m| m.sq), Some(Square::D3));
        assert_eq!(list.find(Square::C4).map(|m| m.sq), Some(Square::C4));
        assert!(list.find(Square::A1).is_none());
        assert_eq!(
            list.squares(),
            Square::D3.bitboard() | Square::C4.bitboard()
        );
    }
}
