use std::fmt::Display;

use arrayvec::ArrayVec;
use mcts::{Game, Moves};

use crate::{
    error::{IllegalMove, PlayResult},
    player::Player,
};

pub const COLUMNS: usize = 7;
pub const ROWS: usize = 6;
const CONNECT: usize = 4;
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Columns are numbered 0 to 6 from the left, pieces stack from the bottom.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConnectFour {
    columns: [ArrayVec<Player, ROWS>; COLUMNS],
    pub to_move: Player,
    winner: Option<Player>,
}

impl Default for ConnectFour {
    fn default() -> Self {
        ConnectFour {
            columns: Default::default(),
            to_move: Player::First,
            winner: None,
        }
    }
}

impl ConnectFour {
    pub fn from_moves(moves: &[usize]) -> PlayResult<Self> {
        let mut game = Self::default();
        for &column in moves {
            game.try_play(column)?;
        }
        Ok(game)
    }

    pub fn try_play(&mut self, column: usize) -> PlayResult<()> {
        if self.winner.is_some() || self.is_full() {
            Err(IllegalMove::GameOver)
        } else if column >= COLUMNS {
            Err(IllegalMove::OutOfBounds(column))
        } else if self.columns[column].is_full() {
            Err(IllegalMove::Occupied(column))
        } else {
            self.drop_piece(column);
            Ok(())
        }
    }

    /// The piece at a column and row, row 0 being the bottom.
    pub fn get(&self, column: usize, row: usize) -> Option<Player> {
        self.columns.get(column)?.get(row).copied()
    }

    pub fn is_full(&self) -> bool {
        self.columns.iter().all(ArrayVec::is_full)
    }

    fn drop_piece(&mut self, column: usize) {
        let player = self.to_move;
        self.columns[column].push(player);
        let row = self.columns[column].len() - 1;
        if self.connects(column, row, player) {
            self.winner = Some(player);
        }
        self.to_move = player.next();
    }

    fn run(&self, column: usize, row: usize, (dx, dy): (isize, isize), player: Player) -> usize {
        (1..CONNECT)
            .take_while(|&step| {
                let x = column as isize + dx * step as isize;
                let y = row as isize + dy * step as isize;
                x >= 0 && y >= 0 && self.get(x as usize, y as usize) == Some(player)
            })
            .count()
    }

    fn connects(&self, column: usize, row: usize, player: Player) -> bool {
        DIRECTIONS.iter().any(|&(dx, dy)| {
            let forward = self.run(column, row, (dx, dy), player);
            let backward = self.run(column, row, (-dx, -dy), player);
            1 + forward + backward >= CONNECT
        })
    }
}

impl Game for ConnectFour {
    type Move = usize;
    type Player = Player;

    fn possible_moves(&self) -> Moves<usize> {
        if self.winner.is_some() {
            return Moves::default();
        }
        Moves::Decision(
            (0..COLUMNS)
                .filter(|&column| !self.columns[column].is_full())
                .collect(),
        )
    }

    fn play(&mut self, mv: &usize) {
        self.drop_piece(*mv);
    }

    fn current_player(&self) -> Player {
        self.to_move
    }

    fn winner(&self) -> Option<Player> {
        self.winner
    }
}

impl Display for ConnectFour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..ROWS).rev() {
            let row: Vec<_> = (0..COLUMNS)
                .map(|column| match self.get(column, row) {
                    Some(Player::First) => "x",
                    Some(Player::Second) => "o",
                    None => ".",
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        writeln!(f, "{}", (0..COLUMNS).map(|c| c.to_string()).collect::<Vec<_>>().join(" "))
    }
}
