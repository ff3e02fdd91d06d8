use rand::Rng;

use crate::{config::DrawScore, game::Game, node::NodeId, search::Search, tree::Tree};

const MAX_CONTINUATION_LEN: usize = 8;
const MIN_VISIT_COUNT: u32 = 10;

impl<G: Game, R: Rng> Search<G, R> {
    /// Table of the root moves, most visited first.
    pub fn debug(&self, limit: Option<usize>) -> String {
        let tree = self.tree();
        let player = self.game().current_player();
        let mut children = tree.children(NodeId::ROOT).to_vec();
        children.sort_by_key(|&child| tree.get(child).visits);
        children.reverse();
        format!(
            "move             visits  win rate | continuation\n{}",
            children
                .into_iter()
                .take(limit.unwrap_or(usize::MAX))
                .map(|child| {
                    let node = tree.get(child);
                    let continuation =
                        most_visited_line(tree, child, MIN_VISIT_COUNT, MAX_CONTINUATION_LEN)
                            .into_iter()
                            .map(|mv| format!("{mv:?}"))
                            .collect::<Vec<_>>()
                            .join(" ");
                    format!(
                        "{: <16} {: >6} {: >9.4} | {}\n",
                        node.mv.as_ref().map(|mv| format!("{mv:?}")).unwrap_or_default(),
                        node.visits,
                        node.score_per_visit(player, DrawScore::Zero),
                        continuation,
                    )
                })
                .collect::<String>()
        )
    }

    /// The most visited line from the root, following nodes with more than
    /// `min_visits` visits for at most `depth` moves.
    pub fn principal_variation(&self, min_visits: u32, depth: usize) -> Vec<G::Move> {
        most_visited_line(self.tree(), NodeId::ROOT, min_visits, depth)
    }
}

fn most_visited_line<M: Clone, P: Copy + Eq + std::hash::Hash>(
    tree: &Tree<M, P>,
    from: NodeId,
    min_visits: u32,
    depth: usize,
) -> Vec<M> {
    let mut line = Vec::new();
    let mut current = from;
    while line.len() < depth && tree.get(current).visits > min_visits {
        // First most visited child, like `best_move`.
        let next = tree.children(current).iter().copied().reduce(|best, child| {
            if tree.get(child).visits > tree.get(best).visits {
                child
            } else {
                best
            }
        });
        match next.and_then(|id| tree.get(id).mv.clone().map(|mv| (id, mv))) {
            Some((id, mv)) => {
                line.push(mv);
                current = id;
            }
            None => break,
        }
    }
    line
}
