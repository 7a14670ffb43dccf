//! Error types for the comment list engine.
//!
//! Every fallible operation on the item store or the list presenter returns
//! [`ListError`]. Errors are refusals: when an operation returns `Err`, the
//! sequence, the expansion flags and the extent cache are exactly as they
//! were before the call.
//!
//! # Recovery Strategy
//!
//! - **InvalidSeed**: Fatal at startup - the screen cannot be shown without
//!   a well-formed initial list.
//! - **ItemNotFound / IndexOutOfRange**: Caller bug (a stale handle or a
//!   position outside the list). The request is dropped and logged.
//! - **NotExpandable**: The row offers no affordance; the trigger is ignored.
//! - **BrokenReplyBlock**: The reply block next to a comment no longer
//!   matches its expansion flag. Never produced by the store's own mutations.

use crate::model::identifiers::ItemId;
use thiserror::Error;

/// Failure of an item store or presenter operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The initial list could not be built.
    ///
    /// Raised for empty or duplicated ids and for seed files that cannot be
    /// read or parsed.
    #[error("Invalid seed: {reason}")]
    InvalidSeed {
        /// Human-readable description of what was wrong.
        reason: String,
    },

    /// No item with this id is present in the sequence.
    ///
    /// Includes ids of replies that were removed by an earlier collapse.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// The item is a reply, or a comment without available replies.
    #[error("Item cannot be expanded or collapsed: {0}")]
    NotExpandable(ItemId),

    /// A row position outside `[0, len)`.
    #[error("Row index {index} out of range (len: {len})")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Sequence length at the time of the request.
        len: usize,
    },

    /// The rows after an expanded comment are not its reply block.
    #[error("Reply block after {0} does not match its reply count")]
    BrokenReplyBlock(ItemId),
}

impl ListError {
    /// Shorthand for building an [`ListError::InvalidSeed`].
    pub fn invalid_seed(reason: impl Into<String>) -> Self {
        Self::InvalidSeed {
            reason: reason.into(),
        }
    }
}
