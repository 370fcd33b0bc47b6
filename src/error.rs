//! Error types for termbase.
//!
//! Three layers, innermost first:
//!
//! - [`AggregateError`]: a match record the aggregation core cannot accept.
//!   Fail-fast; one bad record aborts the whole query.
//! - [`ProviderError`]: the search provider failed. Transient failures are
//!   retried by [`GlossarySearch`](crate::search::GlossarySearch), fatal ones
//!   are not.
//! - [`SearchError`]: everything a search request can surface to its caller.

use thiserror::Error;

/// A raw match record violates the input contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregateError {
    /// A required key is absent (or `null`).
    #[error("record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A key is present but its value is unusable.
    #[error("record {index}: malformed field `{field}`: {reason}")]
    MalformedInput {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

/// Failure reported by a [`SearchProvider`](crate::provider::SearchProvider).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// Worth retrying: dropped connection, lock timeout, server gone away.
    #[error("transient provider failure: {0}")]
    Transient(String),

    /// Retrying cannot help: bad credentials, broken query, schema mismatch.
    #[error("provider failure: {0}")]
    Fatal(String),
}

impl ProviderError {
    #[inline]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

/// Errors that can occur while serving a search request.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query string was rejected before reaching the provider.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    /// Every attempt hit a transient failure.
    #[error("provider still failing after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: ProviderError },
}

/// Convenience type alias for search results.
pub type Result<T> = std::result::Result<T, SearchError>;
