use std::{
    collections::BTreeMap,
    fmt::Display,
    io::{self, Write},
    ops::ControlFlow,
    time::Instant,
};

use anyhow::{bail, Result};
use log::{debug, info};
use mcts::{Moves, Search, SearchError};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{cli::SearchArgs, position::Position};

pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Search a position in batches, logging progress in between.
pub fn search<P: Position>(game: &P, args: &SearchArgs, ply: u64) -> Result<Search<P>> {
    let config = args.config();
    if config.rounds == 0 {
        bail!(SearchError::ZeroRounds);
    }
    let mut search = match args.seed {
        Some(seed) => Search::seeded(game.clone(), config, seed.wrapping_add(ply)),
        None => Search::new(game.clone(), config),
    };
    let start = Instant::now();
    search.search_in_batches(|search| {
        info!(
            "{}/{} simulations, {} nodes, {:.2}s",
            search.simulations(),
            search.config().rounds,
            search.tree_size(),
            start.elapsed().as_secs_f64()
        );
        match args.max_seconds {
            Some(limit) if start.elapsed().as_secs_f64() >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    })?;
    debug!("root moves\n{}", search.debug(Some(5)));
    Ok(search)
}

pub fn think<P: Position>(game: &P, args: &SearchArgs, ply: u64) -> Result<P::Move> {
    Ok(search(game, args, ply)?.best_move()?)
}

/// Pick a chance outcome the way nature would.
fn roll<M: Clone, R: Rng>(outcomes: Vec<M>, rng: &mut R) -> Result<M> {
    match outcomes.choose(rng) {
        Some(outcome) => Ok(outcome.clone()),
        None => bail!("no outcomes to pick from"),
    }
}

fn ask<M: Display>(moves: &[M]) -> Result<usize> {
    for (index, mv) in moves.iter().enumerate() {
        println!("  [{index}] {mv}");
    }
    loop {
        print!("your move: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            bail!("got EOF while waiting for a move");
        }
        match line.trim().parse::<usize>() {
            Ok(index) if index < moves.len() => return Ok(index),
            _ => println!("pick a number between 0 and {}", moves.len() - 1),
        }
    }
}

/// Play against the engine on the terminal.
pub fn play<P>(args: &SearchArgs, engine_first: bool) -> Result<()>
where
    P: Position,
    P::Move: Display,
    P::Player: Display,
{
    let mut game = P::default();
    let mut rng = rng(args.seed);
    let first = game.current_player();
    let mut ply = 0;
    println!("{}", P::NAME);

    loop {
        println!("{game}");
        let mv = match game.possible_moves() {
            moves if moves.is_empty() => break,
            Moves::Chance(outcomes) => {
                let outcome = roll(outcomes, &mut rng)?;
                println!("{outcome}");
                outcome
            }
            Moves::Decision(moves) => {
                if (game.current_player() == first) == engine_first {
                    let mv = think(&game, args, ply)?;
                    println!("engine plays {mv}");
                    mv
                } else {
                    let index = ask(&moves)?;
                    moves[index].clone()
                }
            }
        };
        game.try_play(&mv)?;
        ply += 1;
    }

    match game.winner() {
        Some(player) => println!("{player} player wins"),
        None => println!("draw"),
    }
    Ok(())
}

/// Play one game of the engine against itself and return the winner.
pub fn self_play_game<P: Position>(
    args: &SearchArgs,
    rng: &mut StdRng,
    game_number: u64,
) -> Result<Option<P::Player>> {
    let mut game = P::default();
    let mut ply = game_number << 16;
    loop {
        let mv = match game.possible_moves() {
            moves if moves.is_empty() => break,
            Moves::Chance(outcomes) => roll(outcomes, rng)?,
            Moves::Decision(_) => think(&game, args, ply)?,
        };
        game.try_play(&mv)?;
        ply += 1;
    }
    debug!("final position\n{game}");
    Ok(game.winner())
}

pub fn self_play<P>(args: &SearchArgs, games: usize) -> Result<()>
where
    P: Position,
    P::Player: Display,
{
    let mut rng = rng(args.seed);
    let mut results = BTreeMap::new();
    for game_number in 0..games {
        let result = match self_play_game::<P>(args, &mut rng, game_number as u64)? {
            Some(player) => format!("{player} player wins"),
            None => "draw".to_string(),
        };
        info!("game {}: {result}", game_number + 1);
        *results.entry(result).or_insert(0) += 1;
    }
    println!("{} games of {}", games, P::NAME);
    for (result, count) in results {
        println!("{count: >6} {result}");
    }
    Ok(())
}
