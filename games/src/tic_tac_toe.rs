use std::fmt::Display;

use mcts::{Game, Moves};

use crate::{
    error::{IllegalMove, PlayResult},
    player::Player,
};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Cells are numbered 0 to 8, row by row from the top left.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    pub cells: [Option<Player>; 9],
    pub to_move: Player,
}

impl Default for TicTacToe {
    fn default() -> Self {
        TicTacToe {
            cells: [None; 9],
            to_move: Player::First,
        }
    }
}

impl TicTacToe {
    pub fn from_moves(moves: &[usize]) -> PlayResult<Self> {
        let mut game = Self::default();
        for &cell in moves {
            game.try_play(cell)?;
        }
        Ok(game)
    }

    pub fn try_play(&mut self, cell: usize) -> PlayResult<()> {
        if self.winner().is_some() || self.is_full() {
            Err(IllegalMove::GameOver)
        } else if cell >= self.cells.len() {
            Err(IllegalMove::OutOfBounds(cell))
        } else if self.cells[cell].is_some() {
            Err(IllegalMove::Occupied(cell))
        } else {
            self.place(cell);
            Ok(())
        }
    }

    fn place(&mut self, cell: usize) {
        self.cells[cell] = Some(self.to_move);
        self.to_move = self.to_move.next();
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn ply(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Game for TicTacToe {
    type Move = usize;
    type Player = Player;

    fn possible_moves(&self) -> Moves<usize> {
        if self.winner().is_some() {
            return Moves::default();
        }
        Moves::Decision((0..9).filter(|&cell| self.cells[cell].is_none()).collect())
    }

    fn play(&mut self, mv: &usize) {
        self.place(*mv);
    }

    fn current_player(&self) -> Player {
        self.to_move
    }

    fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(player) if self.cells[b] == Some(player) && self.cells[c] == Some(player) => {
                Some(player)
            }
            _ => None,
        })
    }
}

impl Display for TicTacToe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(3) {
            let row: Vec<_> = row
                .iter()
                .map(|cell| match cell {
                    Some(Player::First) => "x",
                    Some(Player::Second) => "o",
                    None => ".",
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
