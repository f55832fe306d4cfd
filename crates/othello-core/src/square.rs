use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::error::SquareError;
use crate::rules::is_on_board;

/// Represents a square on an Othello board, ranging from A1 to H8.
///
/// Files (columns) are labeled A-H and ranks (rows) 1-8. Rank 1 is the top
/// row of the display, so `(row, col)` coordinates map onto squares as:
///
/// ```text
///        col 0  1  2  3  4  5  6  7
///            A  B  C  D  E  F  G  H
/// row 0 / 1 00 01 02 03 04 05 06 07
/// row 1 / 2 08 09 10 11 12 13 14 15
/// row 2 / 3 16 17 18 19 20 21 22 23
/// row 3 / 4 24 25 26 27 28 29 30 31
/// row 4 / 5 32 33 34 35 36 37 38 39
/// row 5 / 6 40 41 42 43 44 45 46 47
/// row 6 / 7 48 49 50 51 52 53 54 55
/// row 7 / 8 56 57 58 59 60 61 62 63
/// ```
///
/// Index order is the row-major scan order used by move generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

/// Constants for board dimensions
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// The four corner squares in scan order.
pub const CORNERS: [Square; 4] = [Square::A1, Square::H1, Square::A8, Square::H8];

#[rustfmt::skip]
const ALL_SQUARES: [Square; TOTAL_SQUARES] = {
    use Square::*;
    [
        A1, B1, C1, D1, E1, F1, G1, H1,
        A2, B2, C2, D2, E2, F2, G2, H2,
        A3, B3, C3, D3, E3, F3, G3, H3,
        A4, B4, C4, D4, E4, F4, G4, H4,
        A5, B5, C5, D5, E5, F5, G5, H5,
        A6, B6, C6, D6, E6, F6, G6, H6,
        A7, B7, C7, D7, E7, F7, G7, H7,
        A8, B8, C8, D8, E8, F8, G8, H8,
    ]
};

impl Square {
    /// Converts the `Square` into its single-bit [`Bitboard`].
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::from_square(self)
    }

    /// Returns the scan-order index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts a scan-order index into a `Square`.
    ///
    /// # Returns
    /// `Some(Square)` for indices 0-63, `None` otherwise.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        ALL_SQUARES.get(index).copied()
    }

    /// Creates a `Square` from `(row, col)` coordinates.
    ///
    /// Accepts signed coordinates so that direction walks can step off the
    /// board and get `None` back.
    #[inline]
    pub fn from_coord(row: i32, col: i32) -> Option<Square> {
        if is_on_board(row, col) {
            Some(ALL_SQUARES[row as usize * BOARD_SIZE + col as usize])
        } else {
            None
        }
    }

    /// Returns the row (rank index, 0 = rank 1).
    #[inline]
    pub const fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Returns the column (file index, 0 = file A).
    #[inline]
    pub const fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns the `(row, col)` coordinate pair.
    #[inline]
    pub const fn coord(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Returns the neighbouring square one step in direction `(dr, dc)`,
    /// or `None` when that step leaves the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        Square::from_coord(self.row() as i32 + dr, self.col() as i32 + dc)
    }

    /// Returns `true` for A1, H1, A8 and H8.
    #[inline]
    pub fn is_corner(self) -> bool {
        CORNERS.contains(&self)
    }

    /// Returns an iterator over all 64 squares in row-major scan order.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        ALL_SQUARES.into_iter()
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as `"d3"` or `"H8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let col = (file as u8 - b'a') as usize;
        let row = (rank_char as u8 - b'1') as usize;
        Ok(ALL_SQUARES[row * BOARD_SIZE + col])
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.col() as u8 + b'a';
        let rank = self.row() as u8 + b'1';
        write!(f, "{}{}", file as char, rank as char)
    }
}
