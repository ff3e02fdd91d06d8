//! Monte Carlo Tree Search for sequential games with any number of players.
//!
//! Implement [`Game`] for a game and hand it to a [`Search`]:
//!
//! ```
//! use mcts::{Game, Moves, Search, SearchConfig};
//!
//! /// Take one or two stones, whoever takes the last stone wins.
//! #[derive(Clone)]
//! struct Nim {
//!     stones: u8,
//!     to_move: u8,
//! }
//!
//! impl Game for Nim {
//!     type Move = u8;
//!     type Player = u8;
//!
//!     fn possible_moves(&self) -> Moves<u8> {
//!         Moves::Decision((1..=self.stones.min(2)).collect())
//!     }
//!
//!     fn play(&mut self, mv: &u8) {
//!         self.stones -= mv;
//!         self.to_move = 1 - self.to_move;
//!     }
//!
//!     fn current_player(&self) -> u8 {
//!         self.to_move
//!     }
//!
//!     fn winner(&self) -> Option<u8> {
//!         (self.stones == 0).then(|| 1 - self.to_move)
//!     }
//! }
//!
//! let mut search = Search::seeded(Nim { stones: 4, to_move: 0 }, SearchConfig::default(), 7);
//! assert_eq!(search.select_move(), Ok(1));
//! ```

mod config;
mod debug;
mod error;
mod game;
mod node;
mod search;
mod stats;
mod tree;

pub use config::{DrawScore, SearchConfig, DEFAULT_BATCH_SIZE, DEFAULT_ROUNDS, EXPLORATION};
pub use error::{SearchError, SearchResult};
pub use game::{Game, Moves};
pub use node::{Node, NodeId};
pub use search::Search;
pub use stats::{ChildStats, MoveStats, TreeSnapshot};
pub use tree::Tree;
