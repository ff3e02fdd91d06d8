use std::time::Instant;

use anyhow::Result;
use log::info;

use crate::{cli::SearchArgs, play::search, position::Position};

/// Time full searches from the starting position.
pub fn bench<P: Position>(args: &SearchArgs, searches: usize) -> Result<()> {
    let game = P::default();
    let mut simulations = 0;
    let mut seconds = 0.0;
    for i in 0..searches {
        let start = Instant::now();
        let search = search(&game, args, i as u64)?;
        let elapsed = start.elapsed().as_secs_f64();
        info!(
            "search {}: {} simulations, {} nodes in {elapsed:.3}s",
            i + 1,
            search.simulations(),
            search.tree_size()
        );
        simulations += search.simulations();
        seconds += elapsed;
    }
    println!(
        "{}: {simulations} simulations in {seconds:.3}s, sps {:.0}",
        P::NAME,
        simulations as f64 / seconds.max(f64::EPSILON)
    );
    Ok(())
}
