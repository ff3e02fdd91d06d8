use std::path::PathBuf;

use clap::{ArgEnum, Args, Parser, Subcommand};
use mcts::{DrawScore, SearchConfig, DEFAULT_BATCH_SIZE, DEFAULT_ROUNDS};

/// Monte Carlo Tree Search Command Line Interface
#[derive(Parser)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
    #[clap(flatten)]
    pub search: SearchArgs,
    /// More output, repeat for even more
    #[clap(short, long, parse(from_occurrences), global = true)]
    pub verbose: u8,
    /// Write the log to a file instead of stderr
    #[clap(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play against the engine
    Play {
        #[clap(arg_enum)]
        game: GameKind,
        /// Let the engine move first
        #[clap(long)]
        second: bool,
    },
    /// Let the engine play against itself
    SelfPlay {
        #[clap(arg_enum)]
        game: GameKind,
        /// Number of games to play
        #[clap(short, long, default_value_t = 10)]
        games: usize,
    },
    /// Search a position and report the statistics
    Analyse {
        #[clap(arg_enum)]
        game: GameKind,
        /// Moves leading to the position, e.g. `4 0 8` or `t2 r7`
        moves: Vec<String>,
        /// Print the statistics as JSON
        #[clap(long)]
        json: bool,
        /// Depth of the tree included in the JSON output
        #[clap(long, default_value_t = 1)]
        depth: usize,
    },
    /// Measure simulations per second
    Bench {
        #[clap(arg_enum)]
        game: GameKind,
        /// Number of searches to time
        #[clap(short, long, default_value_t = 5)]
        searches: usize,
    },
}

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKind {
    TicTacToe,
    ConnectFour,
    Dice,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Simulations per move
    #[clap(short, long, default_value_t = DEFAULT_ROUNDS, global = true)]
    pub rounds: usize,
    /// Simulations between progress reports
    #[clap(long, default_value_t = DEFAULT_BATCH_SIZE, global = true)]
    pub batch_size: usize,
    /// Stop thinking after this many seconds even if rounds are left
    #[clap(long, global = true)]
    pub max_seconds: Option<f64>,
    /// Score draws as half a win instead of nothing
    #[clap(long, global = true)]
    pub half_draws: bool,
    /// Seed for reproducible searches
    #[clap(long, global = true)]
    pub seed: Option<u64>,
}

impl SearchArgs {
    pub fn config(&self) -> SearchConfig {
        let draw_score = if self.half_draws {
            DrawScore::Half
        } else {
            DrawScore::Zero
        };
        SearchConfig::with_rounds(self.rounds)
            .batch_size(self.batch_size)
            .draw_score(draw_score)
    }
}
