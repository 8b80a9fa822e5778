//! Linked-list intersection and word-pattern matching.
//!
//! - [`algorithms::intersection`] finds the first node two singly-linked
//!   chains share, either by remembering node identities or by aligning the
//!   chain lengths.
//! - [`algorithms::word_pattern`] checks whether a word sequence follows a
//!   pattern of symbols under a one-to-one binding.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod algorithms;
pub mod collections;
pub mod error;

pub use error::{Error, Result};

/// Linked-list intersection and word-pattern matching prelude.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::shared;

    #[doc(no_inline)]
    pub use super::collections::shared_list::{ListNode, NodeId, SharedList, chain};

    #[doc(no_inline)]
    pub use super::algorithms::intersection::*;
    #[doc(no_inline)]
    pub use super::algorithms::word_pattern::*;

    #[doc(no_inline)]
    pub use super::error::Error;
}
