use std::{fmt::Debug, hash::Hash};

/// Legal moves from a position.
///
/// A `Decision` is a set of moves the player to act chooses between.
/// A `Chance` lists the outcomes nature picks from uniformly; outcomes that
/// are more likely are listed more than once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Moves<M> {
    Decision(Vec<M>),
    Chance(Vec<M>),
}

impl<M> Moves<M> {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            Moves::Decision(moves) | Moves::Chance(moves) => moves.len(),
        }
    }

    pub fn is_chance(&self) -> bool {
        matches!(self, Moves::Chance(_))
    }

    /// Flatten into the listed moves or outcomes.
    pub fn into_vec(self) -> Vec<M> {
        match self {
            Moves::Decision(moves) | Moves::Chance(moves) => moves,
        }
    }
}

impl<M> Default for Moves<M> {
    fn default() -> Self {
        Moves::Decision(Vec::new())
    }
}

/// A sequential game the search can be run on.
///
/// The search clones the game once per simulation and only ever mutates
/// the clone, so `play` is free to work in place.
pub trait Game: Clone {
    type Move: Clone + Debug;
    type Player: Copy + Eq + Hash + Debug;

    /// Legal moves from the current position. Empty when the game is over.
    fn possible_moves(&self) -> Moves<Self::Move>;

    /// Apply a move returned by `possible_moves`.
    fn play(&mut self, mv: &Self::Move);

    /// The player whose decision the current position represents.
    fn current_player(&self) -> Self::Player;

    /// The winner, if any. `None` for ongoing and drawn games.
    fn winner(&self) -> Option<Self::Player>;
}
