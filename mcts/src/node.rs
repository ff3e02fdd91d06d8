use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::config::{DrawScore, EXPLORATION};

/// Index of a node in the tree arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct Node<M, P> {
    pub parent: Option<NodeId>,
    /// The move from the parent that leads here. `None` for the root.
    pub mv: Option<M>,
    pub visits: u32,
    pub wins: FxHashMap<P, u32>,
    pub draws: u32,
    /// `None` until the node is expanded.
    pub children: Option<Vec<NodeId>>,
    pub is_chance: bool,
}

impl<M, P: Copy + Eq + Hash> Node<M, P> {
    pub fn root() -> Self {
        Node {
            parent: None,
            mv: None,
            visits: 0,
            wins: FxHashMap::default(),
            draws: 0,
            children: None,
            is_chance: false,
        }
    }

    pub fn new(parent: NodeId, mv: M) -> Self {
        Node {
            parent: Some(parent),
            mv: Some(mv),
            ..Node::root()
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }

    pub fn wins_for(&self, player: P) -> u32 {
        self.wins.get(&player).copied().unwrap_or_default()
    }

    /// Average score for `player` over all visits.
    pub fn score_per_visit(&self, player: P, draw_score: DrawScore) -> f64 {
        if self.visits == 0 {
            return 0.0;
        }
        let score = self.wins_for(player) as f64 + draw_score.credit() * self.draws as f64;
        score / self.visits as f64
    }

    /// UCB1 value of this node seen from `player`.
    ///
    /// Unvisited nodes are infinitely attractive and the root, which is
    /// never a candidate, is worth zero.
    pub fn exploitation_value(
        &self,
        parent_visits: Option<u32>,
        player: P,
        draw_score: DrawScore,
    ) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let parent_visits = match parent_visits {
            Some(visits) if !self.is_root() => visits,
            _ => return 0.0,
        };
        let visits = self.visits as f64;
        let exploration = (EXPLORATION * (parent_visits as f64).ln() / visits).sqrt();
        self.score_per_visit(player, draw_score) + exploration
    }

    /// Count one simulation ending in `winner` (`None` is a draw).
    pub fn record(&mut self, winner: Option<P>) {
        match winner {
            Some(player) => *self.wins.entry(player).or_default() += 1,
            None => self.draws += 1,
        }
    }
}
