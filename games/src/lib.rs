mod connect_four;
mod dice_race;
mod error;
mod player;
mod tic_tac_toe;

pub use connect_four::{ConnectFour, COLUMNS, ROWS};
pub use dice_race::{roll_outcomes, DiceMove, DiceRace, DEFAULT_TARGET};
pub use error::{IllegalMove, PlayResult};
pub use player::Player;
pub use tic_tac_toe::TicTacToe;
