//! Aggregation core: group raw matches by normalized Arabic headword, elect
//! canonical glosses per group, then rank.
//!
//! The whole pipeline is pure and synchronous. Records are validated up
//! front; the first bad record aborts the call.

pub mod cluster;
pub mod elect;
pub mod group;
pub mod rank;

pub use cluster::{Occurrence, TermCluster};
pub use elect::Tally;
pub use group::TermGroup;

use crate::error::AggregateError;
use crate::term::{RawRecord, RawTerm, check_relevance};

/// Aggregate untyped provider records.
///
/// # Errors
///
/// Fails on the first record that [`RawTerm::from_record`] rejects.
pub fn aggregate(records: &[RawRecord]) -> Result<Vec<TermCluster>, AggregateError> {
    let terms = records
        .iter()
        .enumerate()
        .map(|(index, record)| RawTerm::from_record(index, record))
        .collect::<Result<Vec<_>, _>>()?;
    aggregate_terms(terms)
}

/// Aggregate already-typed terms.
///
/// # Errors
///
/// [`AggregateError::MalformedInput`] when a relevance is negative or not
/// finite, or when a cluster's relevance sum overflows.
pub fn aggregate_terms(terms: Vec<RawTerm>) -> Result<Vec<TermCluster>, AggregateError> {
    for (index, term) in terms.iter().enumerate() {
        check_relevance(index, term.relevance)?;
    }
    let records = terms.len();

    let mut clusters = group::group(terms)
        .into_iter()
        .map(elect::elect)
        .collect::<Result<Vec<_>, _>>()?;
    for cluster in &mut clusters {
        rank::rank_members(cluster);
    }
    rank::rank_clusters(&mut clusters);

    tracing::debug!(records, clusters = clusters.len(), "aggregated matches");
    Ok(clusters)
}
