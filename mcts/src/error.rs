use thiserror::Error;

/// Errors produced while searching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum SearchError {
    #[error("there are no legal moves from the root position")]
    NoLegalMoves,
    #[error("cannot select a move with zero simulation rounds")]
    ZeroRounds,
    #[error("tried to select on a node without children")]
    Childless,
    #[error("tried to select on a node that was never expanded")]
    Unexpanded,
}

impl SearchError {
    /// Whether the error means "no move available" rather than a broken
    /// invariant inside the search.
    pub fn is_no_move(&self) -> bool {
        matches!(self, SearchError::NoLegalMoves | SearchError::ZeroRounds)
    }
}

pub type SearchResult<T> = Result<T, SearchError>;
