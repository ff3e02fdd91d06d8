//! A dice game with chance nodes.
//!
//! On their turn a player throws one or two dice and adds the total to their
//! score. Landing exactly on the target wins, overshooting it wastes the turn.

use std::fmt::Display;

use mcts::{Game, Moves};
use serde::Serialize;

use crate::{
    error::{IllegalMove, PlayResult},
    player::Player,
};

pub const DEFAULT_TARGET: u8 = 12;
const MAX_DICE: u8 = 2;
const SIDES: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiceMove {
    /// Decide how many dice to throw.
    Throw(u8),
    /// The total the dice came up with.
    Roll(u8),
}

impl Display for DiceMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiceMove::Throw(1) => write!(f, "throw 1 die"),
            DiceMove::Throw(dice) => write!(f, "throw {dice} dice"),
            DiceMove::Roll(total) => write!(f, "rolled {total}"),
        }
    }
}

/// Every way `dice` dice can land, as totals.
///
/// Totals appear as often as there are combinations producing them, so
/// picking uniformly from the list matches real dice.
pub fn roll_outcomes(dice: u8) -> Vec<u8> {
    (0..dice).fold(vec![0], |totals, _| {
        totals
            .into_iter()
            .flat_map(|total| (1..=SIDES).map(move |side| total + side))
            .collect()
    })
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DiceRace {
    pub scores: [u8; 2],
    pub target: u8,
    pub to_move: Player,
    /// Dice in the air, waiting for the roll.
    pub throwing: Option<u8>,
    winner: Option<Player>,
}

impl Default for DiceRace {
    fn default() -> Self {
        Self::with_target(DEFAULT_TARGET)
    }
}

impl DiceRace {
    pub fn with_target(target: u8) -> Self {
        DiceRace {
            scores: [0; 2],
            target,
            to_move: Player::First,
            throwing: None,
            winner: None,
        }
    }

    pub fn distance(&self, player: Player) -> u8 {
        self.target - self.scores[player.index()]
    }

    pub fn try_play(&mut self, mv: DiceMove) -> PlayResult<()> {
        if self.winner.is_some() {
            return Err(IllegalMove::GameOver);
        }
        match (mv, self.throwing) {
            (DiceMove::Throw(_), Some(_)) => Err(IllegalMove::AwaitingRoll),
            (DiceMove::Roll(_), None) => Err(IllegalMove::AwaitingDecision),
            (DiceMove::Throw(dice), None) if dice == 0 || dice > MAX_DICE => {
                Err(IllegalMove::DiceCount(dice))
            }
            (DiceMove::Roll(total), Some(dice)) if total < dice || total > dice * SIDES => {
                Err(IllegalMove::ImpossibleRoll(total))
            }
            _ => {
                self.apply(mv);
                Ok(())
            }
        }
    }

    fn apply(&mut self, mv: DiceMove) {
        match mv {
            DiceMove::Throw(dice) => self.throwing = Some(dice),
            DiceMove::Roll(total) => {
                let player = self.to_move;
                let score = self.scores[player.index()].saturating_add(total);
                if score == self.target {
                    self.winner = Some(player);
                }
                if score <= self.target {
                    self.scores[player.index()] = score;
                }
                self.throwing = None;
                self.to_move = player.next();
            }
        }
    }
}

impl Game for DiceRace {
    type Move = DiceMove;
    type Player = Player;

    fn possible_moves(&self) -> Moves<DiceMove> {
        match (self.winner, self.throwing) {
            (Some(_), _) => Moves::default(),
            (None, Some(dice)) => {
                Moves::Chance(roll_outcomes(dice).into_iter().map(DiceMove::Roll).collect())
            }
            (None, None) => Moves::Decision((1..=MAX_DICE).map(DiceMove::Throw).collect()),
        }
    }

    fn play(&mut self, mv: &DiceMove) {
        self.apply(*mv);
    }

    fn current_player(&self) -> Player {
        self.to_move
    }

    fn winner(&self) -> Option<Player> {
        self.winner
    }
}

impl Display for DiceRace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "first {}/{}, second {}/{}, {} to move",
            self.scores[0], self.target, self.scores[1], self.target, self.to_move
        )
    }
}
