mod game;
mod ui;

use clap::{Parser, ValueEnum};
use othello_core::disc::Player;
use othello_core::search::PassPolicy;
use othello_core::search::options::SearchOptions;
use tracing_subscriber::EnvFilter;

/// Play Othello against the computer in the terminal.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Colour played by the computer.
    #[arg(long, value_enum, default_value_t = Color::White)]
    ai_color: Color,

    /// Minimax depth in plies.
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,

    /// Number of empty squares at which the computer switches to minimax.
    #[arg(long, default_value = "24", value_parser = clap::value_parser!(u32).range(0..=60))]
    late_game_threshold: u32,

    /// Whether a forced pass inside the search costs a ply.
    #[arg(long, value_enum, default_value_t = PassArg::Consume)]
    pass_policy: PassArg,

    /// Log filter, e.g. `debug` or `othello_core=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Color {
    Black,
    White,
}

impl From<Color> for Player {
    fn from(color: Color) -> Player {
        match color {
            Color::Black => Player::Black,
            Color::White => Player::White,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PassArg {
    Consume,
    Keep,
}

impl From<PassArg> for PassPolicy {
    fn from(arg: PassArg) -> PassPolicy {
        match arg {
            PassArg::Consume => PassPolicy::ConsumeDepth,
            PassArg::Keep => PassPolicy::KeepDepth,
        }
    }
}

fn init_logging(log_level: Option<&str>) -> anyhow::Result<()> {
    let filter = match log_level {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.log_level.as_deref())?;

    let options = SearchOptions {
        depth: args.depth,
        late_game_threshold: args.late_game_threshold,
        pass_policy: args.pass_policy.into(),
        ..SearchOptions::default()
    };
    tracing::debug!(?options, "starting game");

    ui::ui_loop(&options, args.ai_color.into())
}
