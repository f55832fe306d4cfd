use std::fmt;

/// One of the two sides of the game.
///
/// Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Returns the other player.
    ///
    /// Total and involutive: `p.opponent().opponent() == p`.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Returns the disc this player places.
    #[inline]
    pub const fn disc(self) -> Disc {
        match self {
            Player::Black => Disc::Black,
            Player::White => Disc::White,
        }
    }

    /// Returns the character used for this player's discs in board strings.
    #[inline]
    pub const fn to_char(self) -> char {
        self.disc().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Represents the content of a board cell.
///
/// * `Empty` - Represents an empty spot on the board.
/// * `Black` - Represents a black disc.
/// * `White` - Represents a white disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Empty,
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub const fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Returns the owner of this disc, or `None` for an empty cell.
    pub const fn player(self) -> Option<Player> {
        match self {
            Disc::Black => Some(Player::Black),
            Disc::White => Some(Player::White),
            Disc::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        for p in [Player::Black, Player::White] {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn test_disc_round_trip() {
        assert_eq!(Player::Black.disc().player(), Some(Player::Black));
        assert_eq!(Player::White.disc().player(), Some(Player::White));
        assert_eq!(Disc::Empty.player(), None);
    }

    #[test]
    fn test_to_char() {
        assert_eq!(Player::Black.to_char(), 'X');
        assert_eq!(Player::White.to_char(), 'O');
        assert_eq!(Disc::Empty.to_char(), '-');
    }
}
