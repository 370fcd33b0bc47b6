//! The seam to the term store.
//!
//! Full-text matching and relevance scoring live behind [`SearchProvider`];
//! this crate only consumes the records it returns.

use serde::Deserialize;

use crate::error::ProviderError;
use crate::term::RawRecord;

/// A backend that returns raw match records for a query.
///
/// Implementations must be `Send + Sync` so one search service can be shared
/// across request threads. Records come back in the provider's relevance
/// order; the aggregation core does not re-sort them before grouping.
pub trait SearchProvider: Send + Sync {
    /// # Errors
    ///
    /// [`ProviderError::Transient`] for failures worth retrying,
    /// [`ProviderError::Fatal`] otherwise.
    fn fetch_matches(&self, query: &str) -> Result<Vec<RawRecord>, ProviderError>;
}

impl<P: SearchProvider + ?Sized> SearchProvider for &P {
    fn fetch_matches(&self, query: &str) -> Result<Vec<RawRecord>, ProviderError> {
        (**self).fetch_matches(query)
    }
}

impl<P: SearchProvider + ?Sized> SearchProvider for Box<P> {
    fn fetch_matches(&self, query: &str) -> Result<Vec<RawRecord>, ProviderError> {
        (**self).fetch_matches(query)
    }
}

/// A fixed record set, returned for every query.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    records: Vec<RawRecord>,
}

/// Accepted document shapes: a bare array of records, or a raw search
/// response carrying them under `results`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Records(Vec<RawRecord>),
    Response { results: Vec<RawRecord> },
}

impl InMemoryProvider {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Load records from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the text is neither a JSON array of
    /// objects nor an object with a `results` array.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let records = match serde_json::from_str(text)? {
            Document::Records(records) | Document::Response { results: records } => records,
        };
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SearchProvider for InMemoryProvider {
    fn fetch_matches(&self, _query: &str) -> Result<Vec<RawRecord>, ProviderError> {
        Ok(self.records.clone())
    }
}
