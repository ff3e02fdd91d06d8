use std::ops::ControlFlow;

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::SearchConfig,
    error::{SearchError, SearchResult},
    game::Game,
    node::{Node, NodeId},
    tree::Tree,
};

/// Monte Carlo Tree Search over a single position.
///
/// The search owns a copy of the game it was created with and never
/// mutates it. Every simulation works on a fresh clone.
pub struct Search<G: Game, R = StdRng> {
    game: G,
    config: SearchConfig,
    tree: Tree<G::Move, G::Player>,
    rng: R,
    simulations: usize,
}

impl<G: Game> Search<G> {
    pub fn new(game: G, config: SearchConfig) -> Self {
        Self::with_rng(game, config, StdRng::from_entropy())
    }

    /// A search whose tie-breaking and chance sampling are reproducible.
    pub fn seeded(game: G, config: SearchConfig, seed: u64) -> Self {
        Self::with_rng(game, config, StdRng::seed_from_u64(seed))
    }
}

impl<G: Game, R: Rng> Search<G, R> {
    pub fn with_rng(game: G, config: SearchConfig, rng: R) -> Self {
        Search {
            game,
            config,
            tree: Tree::default(),
            rng,
            simulations: 0,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn tree(&self) -> &Tree<G::Move, G::Player> {
        &self.tree
    }

    pub fn root(&self) -> &Node<G::Move, G::Player> {
        self.tree.root()
    }

    /// Number of simulations run so far.
    pub fn simulations(&self) -> usize {
        self.simulations
    }

    pub fn root_visits(&self) -> u32 {
        self.tree.root().visits
    }

    pub fn tree_size(&self) -> usize {
        self.tree.node_count()
    }

    /// Run one simulation from the root to a terminal position and
    /// propagate its outcome back up the path.
    pub fn run_simulation(&mut self) -> SearchResult<()> {
        let mut game = self.game.clone();
        let mut path = vec![NodeId::ROOT];
        let mut current = NodeId::ROOT;
        self.tree.get_mut(current).visits += 1;

        // Selecting.
        while !self.tree.expand(current, &game).is_empty() {
            let next = self
                .tree
                .select_next(current, &game, self.config.draw_score, &mut self.rng)?;
            let node = self.tree.get_mut(next);
            node.visits += 1;
            if let Some(mv) = &node.mv {
                game.play(mv);
            }
            path.push(next);
            current = next;
        }

        // Terminal, so back-propagate.
        let winner = game.winner();
        for id in path {
            self.tree.get_mut(id).record(winner);
        }
        self.simulations += 1;
        Ok(())
    }

    /// Run `amount` simulations. Returns the total number run so far.
    pub fn run_simulations(&mut self, amount: usize) -> SearchResult<usize> {
        for _ in 0..amount {
            self.run_simulation()?;
        }
        Ok(self.simulations)
    }

    /// Run the configured rounds in batches, handing control back to
    /// `on_batch` after each one. Returning `ControlFlow::Break` stops the
    /// search before the next batch.
    pub fn search_in_batches<F>(&mut self, mut on_batch: F) -> SearchResult<usize>
    where
        F: FnMut(&Self) -> ControlFlow<()>,
    {
        let batch_size = self.config.batch_size.max(1);
        let mut remaining = self.config.rounds;
        while remaining > 0 {
            let batch = remaining.min(batch_size);
            self.run_simulations(batch)?;
            remaining -= batch;
            trace!("batch of {batch} done, {} simulations total", self.simulations);
            if on_batch(self).is_break() {
                debug!("search stopped with {remaining} rounds left");
                break;
            }
        }
        Ok(self.simulations)
    }

    /// Run the configured rounds and pick the most visited move.
    pub fn select_move(&mut self) -> SearchResult<G::Move> {
        if self.config.rounds == 0 {
            return Err(SearchError::ZeroRounds);
        }
        if self.tree.expand(NodeId::ROOT, &self.game).is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        self.run_simulations(self.config.rounds)?;
        let mv = self.best_move()?;
        debug!(
            "picked {mv:?} after {} simulations ({} nodes)",
            self.simulations,
            self.tree.node_count()
        );
        Ok(mv)
    }

    /// The move of the most visited root child, ties going to the first.
    ///
    /// Expands the root if nothing has been searched yet, in which case the
    /// first legal move is returned.
    pub fn best_move(&mut self) -> SearchResult<G::Move> {
        self.tree.expand(NodeId::ROOT, &self.game);
        let mut best: Option<&Node<G::Move, G::Player>> = None;
        for &child in self.tree.children(NodeId::ROOT) {
            let node = self.tree.get(child);
            if best.map_or(true, |b| node.visits > b.visits) {
                best = Some(node);
            }
        }
        best.and_then(|node| node.mv.clone())
            .ok_or(SearchError::NoLegalMoves)
    }
}
