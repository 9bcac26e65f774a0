//! Error types for dataset loading and catalog queries.
//!
//! Every error here is a deterministic function of its input: there are no
//! transient failure modes in a pure in-memory lookup, so nothing is ever
//! retried. `Validation` and `EmptyDataset` are fatal at startup; the two
//! not-found variants are per-request and carry the search term in a
//! localized, user-facing message.

use thiserror::Error;

/// Errors produced by the dataset loader and the quote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// A seed entry in the builtin dataset is missing a required field.
    #[error("invalid dataset entry at index {index}: {reason}")]
    Validation {
        /// Zero-based index of the offending seed entry.
        index: usize,
        /// What was wrong with the entry.
        reason: String,
    },

    /// The dataset contains no quotes, so random selection is undefined.
    #[error("quote dataset is empty")]
    EmptyDataset,

    /// No quote matched the requested author.
    #[error("저자 '{0}'의 명언을 찾을 수 없습니다")]
    AuthorNotFound(String),

    /// No quote contained the requested keyword.
    #[error("키워드 '{0}'를 포함한 명언을 찾을 수 없습니다")]
    KeywordNotFound(String),
}

impl QuoteError {
    /// Returns true for per-request lookup misses (404-equivalent), as
    /// opposed to startup failures.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::AuthorNotFound(_) | Self::KeywordNotFound(_))
    }
}

/// Result type alias for catalog operations.
pub type QuoteResult<T> = Result<T, QuoteError>;
