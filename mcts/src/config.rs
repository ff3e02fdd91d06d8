use serde::{Deserialize, Serialize};

// search
pub const DEFAULT_ROUNDS: usize = 1000;
pub const DEFAULT_BATCH_SIZE: usize = 100;
/// Factor under the square root of the UCB1 exploration term.
pub const EXPLORATION: f64 = 2.0;

/// How a drawn simulation counts towards a node's score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawScore {
    /// Draws add a visit but no score for anyone.
    #[default]
    Zero,
    /// Draws are worth half a win to every player.
    Half,
}

impl DrawScore {
    pub fn credit(self) -> f64 {
        match self {
            DrawScore::Zero => 0.0,
            DrawScore::Half => 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Simulations run by `select_move`.
    pub rounds: usize,
    /// Simulations per batch when searching cooperatively.
    pub batch_size: usize,
    pub draw_score: DrawScore,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            batch_size: DEFAULT_BATCH_SIZE,
            draw_score: DrawScore::Zero,
        }
    }
}

impl SearchConfig {
    pub fn with_rounds(rounds: usize) -> Self {
        Self {
            rounds,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn batch_size(self, batch_size: usize) -> Self {
        Self { batch_size, ..self }
    }

    #[must_use]
    pub fn draw_score(self, draw_score: DrawScore) -> Self {
        Self { draw_score, ..self }
    }
}
