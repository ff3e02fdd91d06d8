use std::fmt::Display;

use anyhow::{anyhow, bail, Context, Result};
use games::{ConnectFour, DiceMove, DiceRace, TicTacToe};
use mcts::Game;

/// What the front-end needs from a game on top of `Game`.
pub trait Position: Game + Display + Default {
    const NAME: &'static str;

    fn parse_move(text: &str) -> Result<Self::Move>;

    /// Play a move after checking it against the rules.
    fn try_play(&mut self, mv: &Self::Move) -> Result<()>;

    fn from_moves(moves: &[String]) -> Result<Self> {
        let mut game = Self::default();
        for text in moves {
            let mv = Self::parse_move(text)?;
            game.try_play(&mv).with_context(|| format!("cannot play {text}"))?;
        }
        Ok(game)
    }
}

fn parse_index(text: &str) -> Result<usize> {
    text.trim()
        .parse()
        .map_err(|_| anyhow!("expected a number, got {text:?}"))
}

impl Position for TicTacToe {
    const NAME: &'static str = "tic-tac-toe";

    fn parse_move(text: &str) -> Result<usize> {
        parse_index(text)
    }

    fn try_play(&mut self, mv: &usize) -> Result<()> {
        Ok(TicTacToe::try_play(self, *mv)?)
    }
}

impl Position for ConnectFour {
    const NAME: &'static str = "connect four";

    fn parse_move(text: &str) -> Result<usize> {
        parse_index(text)
    }

    fn try_play(&mut self, mv: &usize) -> Result<()> {
        Ok(ConnectFour::try_play(self, *mv)?)
    }
}

impl Position for DiceRace {
    const NAME: &'static str = "dice race";

    /// `t1`/`t2` throw one or two dice, `r<total>` is what they rolled.
    fn parse_move(text: &str) -> Result<DiceMove> {
        let text = text.trim();
        let mut chars = text.chars();
        let kind = chars.next();
        let number = chars
            .as_str()
            .parse()
            .map_err(|_| anyhow!("expected t<dice> or r<total>, got {text:?}"))?;
        match kind {
            Some('t') => Ok(DiceMove::Throw(number)),
            Some('r') => Ok(DiceMove::Roll(number)),
            _ => bail!("expected t<dice> or r<total>, got {text:?}"),
        }
    }

    fn try_play(&mut self, mv: &DiceMove) -> Result<()> {
        Ok(DiceRace::try_play(self, *mv)?)
    }
}

#[cfg(test)]
mod tests {
    use games::Player;

    use super::*;

    #[test]
    fn tic_tac_toe_from_moves() {
        let moves: Vec<_> = ["0", "3", "1", "4", "2"].iter().map(|m| m.to_string()).collect();
        let game = <TicTacToe as Position>::from_moves(&moves).unwrap();
        assert_eq!(game.winner(), Some(Player::First));
    }

    #[test]
    fn dice_moves() {
        assert_eq!(DiceRace::parse_move("t2").unwrap(), DiceMove::Throw(2));
        assert_eq!(DiceRace::parse_move(" r11 ").unwrap(), DiceMove::Roll(11));
        assert!(DiceRace::parse_move("x1").is_err());
        assert!(DiceRace::parse_move("").is_err());
    }

    #[test]
    fn illegal_move_is_reported() {
        let moves = vec!["9".to_string()];
        let err = <ConnectFour as Position>::from_moves(&moves).unwrap_err();
        assert_eq!(err.to_string(), "cannot play 9");
    }
}
