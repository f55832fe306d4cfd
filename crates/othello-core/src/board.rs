//! Othello board representation using bitboards.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::disc::{Disc, Player};
use crate::square::{Square, TOTAL_SQUARES};

/// An 8x8 Othello board, one bitboard per colour.
///
/// The board is a plain `Copy` value: the live game owns one instance and
/// every simulated position inside the search is an independent copy. The two
/// bitboards never overlap, so every one of the 64 cells is exactly one of
/// empty, black or white.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// The initial position has:
    /// - Black discs on E4 and D5
    /// - White discs on D4 and E5
    fn default() -> Self {
        Board {
            black: Square::E4.bitboard() | Square::D5.bitboard(),
            white: Square::D4.bitboard() | Square::E5.bitboard(),
        }
    }
}

impl Board {
    /// Creates a new `Board` with the initial Othello setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a `Board` from one bitboard per colour.
    ///
    /// # Panics
    ///
    /// Panics if the two bitboards share a square.
    pub fn from_bitboards(black: impl Into<Bitboard>, white: impl Into<Bitboard>) -> Board {
        let black = black.into();
        let white = white.into();
        assert!(
            (black & white).is_empty(),
            "a square cannot hold both a black and a white disc"
        );
        Board { black, white }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// Cells are read in scan order from A1 to H8, skipping whitespace:
    /// - `'X'` for Black discs
    /// - `'O'` for White discs
    /// - any other character for an empty square
    ///
    /// Characters beyond the 64th cell are ignored.
    pub fn from_string(board_string: &str) -> Board {
        let mut black = Bitboard::default();
        let mut white = Bitboard::default();
        let cells = board_string
            .chars()
            .filter(|c| !c.is_whitespace())
            .take(TOTAL_SQUARES);
        for (sq, c) in Square::iter().zip(cells) {
            if c == Disc::Black.to_char() {
                black = black.set(sq);
            } else if c == Disc::White.to_char() {
                white = white.set(sq);
            }
        }
        Board { black, white }
    }

    /// Gets the disc at a specific square.
    #[inline]
    pub fn disc_at(&self, sq: Square) -> Disc {
        if self.black.contains(sq) {
            Disc::Black
        } else if self.white.contains(sq) {
            Disc::White
        } else {
            Disc::Empty
        }
    }

    /// Returns the discs of `player`.
    #[inline(always)]
    pub fn discs(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Returns the number of discs `player` has on the board.
    #[inline(always)]
    pub fn count(&self, player: Player) -> u32 {
        self.discs(player).count()
    }

    /// Returns the number of occupied squares.
    #[inline(always)]
    pub fn occupied_count(&self) -> u32 {
        (self.black | self.white).count()
    }

    /// Gets the empty squares.
    #[inline(always)]
    pub fn empty(&self) -> Bitboard {
        !(self.black | self.white)
    }

    /// Returns the number of empty squares on the board.
    #[inline(always)]
    pub fn empty_count(&self) -> u32 {
        self.empty().count()
    }

    /// Checks if a given square is empty.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.empty().contains(sq)
    }

    /// Returns `player`'s disc count minus the opponent's.
    #[inline]
    pub fn disc_difference(&self, player: Player) -> i32 {
        self.count(player) as i32 - self.count(player.opponent()) as i32
    }

    /// Returns a new board with `player`'s disc placed on `sq` and every disc
    /// in `flipped` turned to `player`.
    ///
    /// No legality check is made; `flipped` is trusted to hold opponent discs.
    #[inline(always)]
    pub fn make_move_with_flipped(&self, player: Player, flipped: Bitboard, sq: Square) -> Board {
        let placed = flipped | sq.bitboard();
        match player {
            Player::Black => Board {
                black: self.black | placed,
                white: self.white & !flipped,
            },
            Player::White => Board {
                black: self.black & !flipped,
                white: self.white | placed,
            },
        }
    }

    /// Converts the board to an 8-line grid using `X`, `O` and `-`.
    pub fn to_string_as_board(&self) -> String {
        let mut s = String::with_capacity(TOTAL_SQUARES + 8);
        for (i, sq) in Square::iter().enumerate() {
            if i > 0 && i % 8 == 0 {
                s.push('\n');
            }
            s.push(self.disc_at(sq).to_char());
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_as_board())
    }
}
