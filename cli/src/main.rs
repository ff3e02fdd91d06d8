use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameKind, SearchArgs};
use games::{ConnectFour, DiceRace, TicTacToe};
use log::LevelFilter;
use mimalloc::MiMalloc;

mod analysis;
mod bench;
mod cli;
mod play;
mod position;

use position::Position;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

impl Command {
    fn game(&self) -> GameKind {
        match self {
            Command::Play { game, .. }
            | Command::SelfPlay { game, .. }
            | Command::Analyse { game, .. }
            | Command::Bench { game, .. } => *game,
        }
    }
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    match log_file {
        Some(path) => simple_logging::log_to_file(path, level)
            .with_context(|| format!("cannot open log file {}", path.display()))?,
        None => simple_logging::log_to_stderr(level),
    }
    Ok(())
}

fn run<P>(command: &Command, args: &SearchArgs) -> Result<()>
where
    P: Position,
    P::Move: std::fmt::Display + serde::Serialize,
    P::Player: std::fmt::Display + serde::Serialize,
{
    match command {
        Command::Play { second, .. } => play::play::<P>(args, *second),
        Command::SelfPlay { games, .. } => play::self_play::<P>(args, *games),
        Command::Analyse {
            moves, json, depth, ..
        } => analysis::analyse::<P>(args, moves, *json, *depth),
        Command::Bench { searches, .. } => bench::bench::<P>(args, *searches),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    log::debug!("{:?}", cli.search.config());

    match cli.command.game() {
        GameKind::TicTacToe => run::<TicTacToe>(&cli.command, &cli.search),
        GameKind::ConnectFour => run::<ConnectFour>(&cli.command, &cli.search),
        GameKind::Dice => run::<DiceRace>(&cli.command, &cli.search),
    }
}
