//! Error types for structural board problems.
//!
//! Rejected moves are not errors: they come back as
//! [`MoveOutcome`](crate::rules::MoveOutcome) values. The errors here cover
//! row pairs that cannot form a board at all, and out-of-range player ids.

/// Errors raised when assembling a board or player id from caller input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("rows have different lengths: {first} and {second}")]
    MismatchedRows { first: usize, second: usize },

    #[error("row has no store slot")]
    MissingStore,

    #[error("board holds {total} stones, more than one store can bank")]
    TooManyStones { total: u64 },

    #[error("player id must be 0 or 1, got {0}")]
    InvalidPlayer(u8),
}
