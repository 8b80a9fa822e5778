//! Errors raised while building sequences or parsing a [`Strategy`].
//!
//! The algorithms themselves never fail: an absent intersection is `None` and
//! a pattern that does not fit is `false`.
//!
//! [`Strategy`]: crate::algorithms::intersection::Strategy

use thiserror::Error;

/// Alias for a [`Result`](core::result::Result) carrying this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Failures of the construction helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index pointed past the end of a sequence.
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds {
        /// Index that was requested.
        index: usize,
        /// Length of the sequence at the time of the request.
        len: usize,
    },
    /// A strategy name did not match any known intersection strategy.
    #[error("unknown intersection strategy `{0}`")]
    UnknownStrategy(String),
}
