//! Arena-allocated search tree.
//!
//! Nodes live in one vector and point at their parent and children by index,
//! so the tree is owned top-down by whoever owns the `Tree`.

use std::hash::Hash;

use rand::{seq::SliceRandom, Rng};

use crate::{
    config::DrawScore,
    error::{SearchError, SearchResult},
    game::Game,
    node::{Node, NodeId},
};

#[derive(Clone, Debug)]
pub struct Tree<M, P> {
    nodes: Vec<Node<M, P>>,
}

impl<M, P: Copy + Eq + Hash> Default for Tree<M, P> {
    fn default() -> Self {
        Tree {
            nodes: vec![Node::root()],
        }
    }
}

impl<M: Clone, P: Copy + Eq + Hash> Tree<M, P> {
    pub fn get(&self, id: NodeId) -> &Node<M, P> {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<M, P> {
        &mut self.nodes[id.0]
    }

    pub fn root(&self) -> &Node<M, P> {
        self.get(NodeId::ROOT)
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Children of a node, empty if it was never expanded.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).children.as_deref().unwrap_or_default()
    }

    /// UCB1 value of a node from the point of view of `player`.
    pub fn exploitation_value(&self, id: NodeId, player: P, draw_score: DrawScore) -> f64 {
        let node = self.get(id);
        let parent_visits = node.parent.map(|parent| self.get(parent).visits);
        node.exploitation_value(parent_visits, player, draw_score)
    }

    /// Create the children of a node from the moves available in `game`.
    ///
    /// Only the first call queries the game, later calls return the same
    /// children in the same order.
    pub fn expand<G>(&mut self, id: NodeId, game: &G) -> &[NodeId]
    where
        G: Game<Move = M, Player = P>,
    {
        if !self.get(id).is_expanded() {
            let moves = game.possible_moves();
            let is_chance = moves.is_chance();
            let first = self.nodes.len();
            self.nodes
                .extend(moves.into_vec().into_iter().map(|mv| Node::new(id, mv)));
            let last = self.nodes.len();
            let node = self.get_mut(id);
            node.children = Some((first..last).map(NodeId).collect());
            node.is_chance = is_chance;
        }
        self.children(id)
    }

    /// Pick the child to descend into from an expanded node.
    ///
    /// Chance outcomes are sampled uniformly. Decisions go to the child with
    /// the highest UCB1 value for the player to act in `game`, with ties
    /// broken at random.
    pub fn select_next<G, R>(
        &self,
        id: NodeId,
        game: &G,
        draw_score: DrawScore,
        rng: &mut R,
    ) -> SearchResult<NodeId>
    where
        G: Game<Move = M, Player = P>,
        R: Rng + ?Sized,
    {
        let node = self.get(id);
        let children = node.children.as_ref().ok_or(SearchError::Unexpanded)?;
        if children.is_empty() {
            return Err(SearchError::Childless);
        }

        let mut shuffled = children.clone();
        shuffled.shuffle(rng);
        if node.is_chance {
            return shuffled.last().copied().ok_or(SearchError::Childless);
        }

        let player = game.current_player();
        let mut scored: Vec<_> = shuffled
            .into_iter()
            .map(|child| (self.exploitation_value(child, player, draw_score), child))
            .collect();
        // Stable, so equal scores keep their shuffled order.
        scored.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        scored.last().map(|&(_, child)| child).ok_or(SearchError::Childless)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::game::Moves;

    /// Counts how often its move list is asked for.
    #[derive(Clone, Default)]
    struct Counting {
        queries: std::cell::Cell<u32>,
        chance: bool,
    }

    impl Game for Counting {
        type Move = u8;
        type Player = u8;

        fn possible_moves(&self) -> Moves<u8> {
            self.queries.set(self.queries.get() + 1);
            if self.chance {
                Moves::Chance(vec![1, 2, 2])
            } else {
                Moves::Decision(vec![1, 2, 3])
            }
        }

        fn play(&mut self, _mv: &u8) {}

        fn current_player(&self) -> u8 {
            0
        }

        fn winner(&self) -> Option<u8> {
            None
        }
    }

    #[test]
    fn expand_is_idempotent() {
        let game = Counting::default();
        let mut tree = Tree::default();
        let first = tree.expand(NodeId::ROOT, &game).to_vec();
        let second = tree.expand(NodeId::ROOT, &game).to_vec();
        assert_eq!(first, second);
        assert_eq!(game.queries.get(), 1);
        assert_eq!(tree.node_count(), 4);
        let moves: Vec<_> = first.iter().map(|&id| tree.get(id).mv).collect();
        assert_eq!(moves, vec![Some(1), Some(2), Some(3)]);
        assert!(first.iter().all(|&id| tree.get(id).parent == Some(NodeId::ROOT)));
    }

    #[test]
    fn expand_appends_children_after_existing_nodes() {
        let game = Counting::default();
        let mut tree = Tree::default();
        let children = tree.expand(NodeId::ROOT, &game).to_vec();
        let grandchildren = tree.expand(children[1], &game).to_vec();
        assert_eq!(grandchildren, vec![NodeId(4), NodeId(5), NodeId(6)]);
        assert_eq!(tree.node_count(), 7);
        assert!(grandchildren.iter().all(|&id| tree.get(id).parent == Some(children[1])));
        assert!(tree.children(children[0]).is_empty());
    }

    #[test]
    fn expand_marks_chance() {
        let game = Counting {
            chance: true,
            ..Default::default()
        };
        let mut tree = Tree::default();
        assert_eq!(tree.expand(NodeId::ROOT, &game).len(), 3);
        assert!(tree.root().is_chance);
    }

    #[test]
    fn select_before_expand_fails() {
        let tree: Tree<u8, u8> = Tree::default();
        let mut rng = StdRng::seed_from_u64(0);
        let game = Counting::default();
        let result = tree.select_next(NodeId::ROOT, &game, DrawScore::Zero, &mut rng);
        assert_eq!(result, Err(SearchError::Unexpanded));
    }

    #[test]
    fn select_terminal_fails() {
        let mut tree: Tree<u8, u8> = Tree::default();
        tree.get_mut(NodeId::ROOT).children = Some(Vec::new());
        let mut rng = StdRng::seed_from_u64(0);
        let game = Counting::default();
        let result = tree.select_next(NodeId::ROOT, &game, DrawScore::Zero, &mut rng);
        assert_eq!(result, Err(SearchError::Childless));
    }

    #[test]
    fn select_prefers_unvisited() {
        let game = Counting::default();
        let mut tree = Tree::default();
        let children = tree.expand(NodeId::ROOT, &game).to_vec();
        tree.get_mut(NodeId::ROOT).visits = 10;
        for &child in &children[..2] {
            let node = tree.get_mut(child);
            node.visits = 5;
            node.wins.insert(0, 5);
        }
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let picked = tree.select_next(NodeId::ROOT, &game, DrawScore::Zero, &mut rng);
            assert_eq!(picked, Ok(children[2]));
        }
    }

    #[test]
    fn select_breaks_ties_randomly() {
        let game = Counting::default();
        let mut tree = Tree::default();
        let children = tree.expand(NodeId::ROOT, &game).to_vec();
        let mut rng = StdRng::seed_from_u64(2);
        let mut seen = [false; 3];
        for _ in 0..100 {
            let picked = tree
                .select_next(NodeId::ROOT, &game, DrawScore::Zero, &mut rng)
                .unwrap();
            seen[children.iter().position(|&c| c == picked).unwrap()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }
}
