//! Read-only views of a search for reporting and visualisation.

use rand::Rng;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::{
    config::DrawScore,
    game::Game,
    node::{Node, NodeId},
    search::Search,
    tree::Tree,
};

/// Statistics of one root child.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChildStats<M, P: Eq + std::hash::Hash> {
    pub mv: M,
    pub visits: u32,
    pub wins: FxHashMap<P, u32>,
    pub draws: u32,
}

/// Root child statistics along with the win rate of the player to move.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MoveStats<M, P: Eq + std::hash::Hash> {
    #[serde(flatten)]
    pub stats: ChildStats<M, P>,
    pub win_rate: f64,
}

/// A serialisable copy of (the top of) the search tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TreeSnapshot<M, P: Eq + std::hash::Hash> {
    pub mv: Option<M>,
    pub visits: u32,
    pub wins: FxHashMap<P, u32>,
    pub draws: u32,
    pub is_chance: bool,
    pub children: Vec<TreeSnapshot<M, P>>,
}

impl<M: Clone, P: Copy + Eq + std::hash::Hash> TreeSnapshot<M, P> {
    fn build(tree: &Tree<M, P>, id: NodeId, depth: usize) -> Self {
        let node = tree.get(id);
        let children = if depth == 0 {
            Vec::new()
        } else {
            tree.children(id)
                .iter()
                .map(|&child| Self::build(tree, child, depth - 1))
                .collect()
        };
        TreeSnapshot {
            mv: node.mv.clone(),
            visits: node.visits,
            wins: node.wins.clone(),
            draws: node.draws,
            is_chance: node.is_chance,
            children,
        }
    }

    /// Number of nodes in the snapshot.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Self::size).sum::<usize>()
    }
}

fn child_stats<M: Clone, P: Copy + Eq + std::hash::Hash>(
    node: &Node<M, P>,
) -> Option<ChildStats<M, P>> {
    Some(ChildStats {
        mv: node.mv.clone()?,
        visits: node.visits,
        wins: node.wins.clone(),
        draws: node.draws,
    })
}

impl<G: Game, R: Rng> Search<G, R> {
    /// Statistics of every root child in move order.
    pub fn stats(&self) -> Vec<ChildStats<G::Move, G::Player>> {
        let tree = self.tree();
        tree.children(NodeId::ROOT)
            .iter()
            .filter_map(|&child| child_stats(tree.get(child)))
            .collect()
    }

    /// Like `stats`, with the win rate of the player to move at the root.
    pub fn move_stats(&self) -> Vec<MoveStats<G::Move, G::Player>> {
        let player = self.game().current_player();
        let tree = self.tree();
        tree.children(NodeId::ROOT)
            .iter()
            .filter_map(|&child| {
                let node = tree.get(child);
                Some(MoveStats {
                    stats: child_stats(node)?,
                    win_rate: node.score_per_visit(player, DrawScore::Zero),
                })
            })
            .collect()
    }

    /// Copy of the tree down to `max_depth` plies below the root.
    pub fn snapshot(&self, max_depth: usize) -> TreeSnapshot<G::Move, G::Player> {
        TreeSnapshot::build(self.tree(), NodeId::ROOT, max_depth)
    }
}
