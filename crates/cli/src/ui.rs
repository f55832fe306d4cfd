//! Interactive read-eval-print loop.

use anyhow::{Context, bail};
use colored::Colorize;
use othello_core::{
    disc::Player,
    search::{Search, options::SearchOptions, search_result::SearchResult},
    square::Square,
};
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::game::GameState;

const HELP: &str = "\
Commands:
  <square>   play a move, e.g. d3
  undo, u    take back your last move
  new, n     start a new game
  hint       show the move the computer would play for you
  quit, q    leave";

fn describe(result: &SearchResult) -> String {
    match result.score {
        Some(score) => format!(
            "{} ({}, score {score}, {} nodes)",
            result.best_move.sq, result.method, result.n_nodes
        ),
        None => format!("{} ({})", result.best_move.sq, result.method),
    }
}

/// Runs the game until the user quits or input ends.
///
/// # Arguments
/// * `options` - Search options for the computer player
/// * `ai` - Colour played by the computer
pub fn ui_loop(options: &SearchOptions, ai: Player) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new().context("failed to initialise line editor")?;
    let search = Search::new(options);
    let human = ai.opponent();
    let mut game = GameState::new(human);

    println!("You play {human}. Type `help` for commands.\n");

    loop {
        game.print();
        println!();

        if !game.is_game_over() && game.side_to_move() == ai {
            let Some(result) = search.choose_move(game.board(), ai) else {
                bail!("computer has no legal move on its turn");
            };
            println!("Computer plays {}\n", describe(&result).bright_white());
            game.play(&result.best_move)?;
            continue;
        }

        let readline = rl.readline("> ");
        let line = match readline {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        };
        let _ = rl.add_history_entry(&line);

        let Some(cmd) = line.split_whitespace().next() else {
            continue;
        };
        println!();

        match cmd {
            "quit" | "q" => break,
            "new" | "n" => game = GameState::new(human),
            "undo" | "u" => {
                if !game.undo() {
                    println!("No moves to undo\n");
                }
            }
            "hint" => {
                if game.is_game_over() {
                    println!("The game is over\n");
                } else if let Some(result) = search.choose_move(game.board(), human) {
                    println!("Hint: {}\n", describe(&result));
                }
            }
            "help" | "h" | "?" => println!("{HELP}\n"),
            _ => match cmd.parse::<Square>() {
                Ok(sq) => {
                    if let Err(err) = game.make_move(sq) {
                        println!("{}\n", err.to_string().bright_red());
                    }
                }
                Err(err) => println!("Unknown command: {cmd} ({err})\n"),
            },
        }
    }

    Ok(())
}
