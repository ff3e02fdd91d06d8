use std::{fmt::Display, hash::Hash};

use anyhow::Result;
use mcts::{MoveStats, TreeSnapshot};
use serde::Serialize;

use crate::{cli::SearchArgs, play::search, position::Position};

const PV_MIN_VISITS: u32 = 10;
const PV_DEPTH: usize = 12;

#[derive(Serialize)]
struct Report<M, P: Eq + Hash> {
    game: &'static str,
    best: M,
    simulations: usize,
    principal_variation: Vec<M>,
    moves: Vec<MoveStats<M, P>>,
    tree: TreeSnapshot<M, P>,
}

/// Search the position reached by `moves` and print what the engine thinks.
pub fn analyse<P>(args: &SearchArgs, moves: &[String], json: bool, depth: usize) -> Result<()>
where
    P: Position,
    P::Move: Display + Serialize,
    P::Player: Display + Serialize,
{
    let game = P::from_moves(moves)?;
    let mut search = search(&game, args, moves.len() as u64)?;
    let best = search.best_move()?;
    let principal_variation = search.principal_variation(PV_MIN_VISITS, PV_DEPTH);

    if json {
        let report = Report {
            game: P::NAME,
            best,
            simulations: search.simulations(),
            principal_variation,
            moves: search.move_stats(),
            tree: search.snapshot(depth),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{game}");
    println!("{} to move", game.current_player());
    println!(
        "{} simulations, {} nodes in the tree",
        search.simulations(),
        search.tree_size()
    );
    print!("{}", search.debug(None));
    println!("best move: {best}");
    println!(
        "principal variation: {}",
        principal_variation
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(())
}
