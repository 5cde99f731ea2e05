//! Errors surfaced by [`RangeQueryTree`](crate::RangeQueryTree).
//!
//! Every failing call leaves the tree untouched, so callers can recover
//! by simply fixing the arguments.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned when a tree operation is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source sequence had no elements.
    #[error("cannot build a range query tree from an empty sequence")]
    Empty,
    /// An index fell outside `[0, len)`.
    #[error("index {index} is out of range for a tree of length {len}")]
    OutOfRange { index: usize, len: usize },
    /// An inclusive query had `l > r`.
    #[error("inverted query range: l = {l} is greater than r = {r}")]
    InvertedRange { l: usize, r: usize },
}

/// The two broad classes of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tree could not be constructed from the given input.
    InvalidInput,
    /// A query or update addressed positions the tree does not cover.
    OutOfRange,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        return match self {
            Error::Empty => ErrorKind::InvalidInput,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::InvertedRange { .. } => ErrorKind::OutOfRange,
        };
    }
}
