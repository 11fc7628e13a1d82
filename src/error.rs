//! Errors returned at the public boundary of the trees.

use thiserror::Error;

/// The ways an operation on a tree can be rejected.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Error)]
pub enum RangeError {
    #[error("index {index} is out of bounds of tree length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("cannot build a tree over an empty array")]
    EmptyInput,
    #[error("start of range {start} is bigger than end of range {end}")]
    InvalidRange { start: usize, end: usize },
}

pub type Result<T> = std::result::Result<T, RangeError>;
