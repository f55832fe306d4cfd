//! Othello rules engine and computer opponent.
//!
//! The crate is built around an immutable [`board::Board`] value: the
//! [`rules`] module answers questions about it and derives new boards, the
//! [`eval`] and [`search`] modules pick moves for the computer player, and
//! [`game_state::GameState`] drives a game turn by turn.

pub mod bitboard;
pub mod board;
pub mod constants;
pub mod disc;
pub mod error;
pub mod eval;
pub mod game_state;
pub mod move_list;
pub mod perft;
pub mod rules;
pub mod search;
pub mod square;
pub mod types;
