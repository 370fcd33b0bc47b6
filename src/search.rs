//! Search service: query validation, provider retries, response shaping.

use serde::Serialize;
use std::thread;

use crate::aggregate::{TermCluster, aggregate_terms};
use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::provider::SearchProvider;
use crate::term::{RawRecord, RawTerm};

/// Flat match list, one entry per matched record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawSearchResponse {
    pub q: String,
    pub number_results: usize,
    pub results: Vec<RawTerm>,
}

/// Matches clustered by normalized headword.
///
/// `number_results` counts raw matches, not groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedResponse {
    pub q: String,
    pub number_results: usize,
    pub groups: Vec<TermCluster>,
}

/// Glossary search over a [`SearchProvider`].
#[derive(Debug)]
pub struct GlossarySearch<P> {
    provider: P,
    config: SearchConfig,
}

impl<P: SearchProvider> GlossarySearch<P> {
    /// # Errors
    ///
    /// [`SearchError::Config`] if `config` fails validation.
    pub fn new(provider: P, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Validated matches in provider order.
    pub fn search_raw(&self, q: &str) -> Result<RawSearchResponse> {
        let q = self.check_query(q)?;
        let results = parse(&self.fetch(q)?)?;
        tracing::info!(query = q, results = results.len(), "search completed");
        Ok(RawSearchResponse {
            q: q.to_owned(),
            number_results: results.len(),
            results,
        })
    }

    /// Matches grouped, with canonical glosses and ranking applied.
    pub fn search_aggregated(&self, q: &str) -> Result<AggregatedResponse> {
        let q = self.check_query(q)?;
        let terms = parse(&self.fetch(q)?)?;
        let number_results = terms.len();
        let groups = aggregate_terms(terms)?;
        tracing::info!(
            query = q,
            results = number_results,
            groups = groups.len(),
            "aggregated search completed"
        );
        Ok(AggregatedResponse {
            q: q.to_owned(),
            number_results,
            groups,
        })
    }

    fn check_query<'q>(&self, q: &'q str) -> Result<&'q str> {
        let q = q.trim();
        if q.is_empty() {
            return Err(SearchError::InvalidQuery("missing 'q' parameter".into()));
        }
        let chars = q.chars().count();
        if chars > self.config.max_query_chars {
            return Err(SearchError::InvalidQuery(format!(
                "query is {chars} characters, limit is {}",
                self.config.max_query_chars
            )));
        }
        Ok(q)
    }

    fn fetch(&self, q: &str) -> Result<Vec<RawRecord>> {
        let mut attempt = 0;
        loop {
            match self.provider.fetch_matches(q) {
                Ok(records) => return Ok(records),
                Err(err) if !err.is_transient() => return Err(err.into()),
                Err(err) if attempt >= self.config.max_retries => {
                    return Err(SearchError::RetriesExhausted {
                        attempts: attempt + 1,
                        last: err,
                    });
                }
                Err(err) => {
                    let delay = self.config.backoff(attempt);
                    attempt += 1;
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "transient provider failure, retrying"
                    );
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                }
            }
        }
    }
}

fn parse(records: &[RawRecord]) -> Result<Vec<RawTerm>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| RawTerm::from_record(index, record).map_err(SearchError::from))
        .collect()
}
