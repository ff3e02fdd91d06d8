use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum IllegalMove {
    #[error("the game is already over")]
    GameOver,
    #[error("{0} is not on the board")]
    OutOfBounds(usize),
    #[error("{0} is already taken")]
    Occupied(usize),
    #[error("a roll was expected, not a decision")]
    AwaitingRoll,
    #[error("a decision was expected, not a roll")]
    AwaitingDecision,
    #[error("cannot throw {0} dice")]
    DiceCount(u8),
    #[error("{0} cannot be rolled")]
    ImpossibleRoll(u8),
}

pub type PlayResult<T> = Result<T, IllegalMove>;
