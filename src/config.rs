//! Search service configuration.
//!
//! [`SearchConfig`] controls retry behaviour towards the provider and query
//! length limits. Missing fields take their defaults when deserialized.

use serde::Deserialize;
use std::time::Duration;

use crate::error::SearchError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Retries after the first attempt on transient provider failures.
    pub max_retries: u32,
    /// Delay before the first retry; doubles with every further retry.
    pub backoff_base_ms: u64,
    /// Upper bound for a single retry delay.
    pub backoff_max_ms: u64,
    /// Longest accepted query, in characters, after trimming.
    pub max_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_base_ms: 100,
            backoff_max_ms: 2000,
            max_query_chars: 256,
        }
    }
}

impl SearchConfig {
    /// Checks:
    /// - `backoff_base_ms` must be <= `backoff_max_ms`
    /// - `max_query_chars` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.backoff_base_ms > self.backoff_max_ms {
            return Err(SearchError::Config(
                "backoff_base_ms must be <= backoff_max_ms".into(),
            ));
        }
        if self.max_query_chars == 0 {
            return Err(SearchError::Config(
                "max_query_chars must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Delay before retry number `attempt` (0-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        let ms = self
            .backoff_base_ms
            .saturating_mul(factor)
            .min(self.backoff_max_ms);
        Duration::from_millis(ms)
    }
}
