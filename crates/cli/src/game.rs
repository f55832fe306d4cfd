//! Board rendering for the terminal.
//!
//! Draws the position in color, marks the human's legal moves and prints
//! pass announcements as moves are played.

use colored::Colorize;
use othello_core::{
    bitboard::Bitboard,
    board::Board,
    disc::{Disc, Player},
    error::Result,
    game_state,
    move_list::Move,
    square::Square,
};

/// The core game state plus the side the human plays.
pub struct GameState {
    core: game_state::GameState,
    human: Player,
}

impl GameState {
    /// Creates a new game in the initial position.
    pub fn new(human: Player) -> Self {
        Self {
            core: game_state::GameState::new(),
            human,
        }
    }

    pub fn board(&self) -> &Board {
        self.core.board()
    }

    pub fn side_to_move(&self) -> Player {
        self.core.side_to_move()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.core.is_game_over() && self.core.side_to_move() == self.human
    }

    pub fn is_game_over(&self) -> bool {
        self.core.is_game_over()
    }

    pub fn make_move(&mut self, sq: Square) -> Result<Move> {
        let mv = self.core.make_move(sq)?;
        self.announce_pass();
        Ok(mv)
    }

    pub fn play(&mut self, mv: &Move) -> Result<()> {
        self.core.play(mv)?;
        self.announce_pass();
        Ok(())
    }

    /// Takes back moves until it is the human's turn again.
    ///
    /// # Returns
    /// `false` if nothing could be undone.
    pub fn undo(&mut self) -> bool {
        let mut undone = false;
        while self.core.undo().is_ok() {
            undone = true;
            if self.core.side_to_move() == self.human {
                break;
            }
        }
        undone
    }

    fn announce_pass(&self) {
        if let Some(player) = self.core.last_pass() {
            println!(
                "{}",
                format!("{player} has no legal moves and passes").bright_magenta()
            );
        }
    }

    /// Prints a colored representation of the board to the terminal.
    ///
    /// Legal moves are marked only on the human's turn.
    pub fn print(&self) {
        let board = self.core.board();
        let side_to_move = self.core.side_to_move();
        let last_move = self.core.last_move();
        let legal = if self.is_human_turn() {
            self.core.legal_moves().squares()
        } else {
            Bitboard::default()
        };
        let (black_count, white_count) = self.core.score();

        // Header
        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for (y, row) in Square::iter()
            .collect::<Vec<_>>()
            .chunks(8)
            .enumerate()
        {
            print!("  {} │", y + 1);

            for &sq in row {
                let is_last_move = Some(sq) == last_move;
                let symbol = match board.disc_at(sq) {
                    Disc::Black if is_last_move => " X ".on_bright_black().bright_green(),
                    Disc::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Disc::Black => " X ".bright_green(),
                    Disc::White => " O ".bright_yellow(),
                    Disc::Empty if legal.contains(sq) => " · ".bright_cyan(),
                    Disc::Empty => "   ".black(),
                };
                print!("{symbol}│");
            }

            // Side information
            match y {
                2 if !self.core.is_game_over() => {
                    let player_info = match side_to_move {
                        Player::Black => "Black's turn (X)".bright_green(),
                        Player::White => "White's turn (O)".bright_yellow(),
                    };
                    println!("   {player_info}");
                }
                3 => println!("   Black: {}", format!("{black_count:2}").bright_green()),
                4 => println!("   White: {}", format!("{white_count:2}").bright_yellow()),
                6 if self.core.is_game_over() => match self.core.winner() {
                    Some(Player::Black) => println!("   {}", "Black wins!".bright_green()),
                    Some(Player::White) => println!("   {}", "White wins!".bright_yellow()),
                    None => println!("   {}", "Draw".bright_cyan()),
                },
                7 if self.core.is_game_over() => {
                    println!("   {}", "*** Game Over ***".bright_red())
                }
                _ => println!(),
            }

            if y < 7 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        // Footer
        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    }
}
