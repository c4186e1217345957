use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeapsortError {
    #[error("invalid element count: {0}")]
    InvalidCount(String),
    #[error("requested {requested} elements but capacity is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },
    #[error("value #{position} is not an integer: {token:?}")]
    MalformedInput { position: usize, token: String },
    #[error("expected {expected} values but input ended after {found}")]
    MissingValues { expected: usize, found: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}
