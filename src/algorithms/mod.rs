//! Algorithms over the crate's collections and plain slices.

pub mod intersection;
pub mod word_pattern;
