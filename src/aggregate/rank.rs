//! Member and cluster ordering.

use std::cmp::Ordering;

use crate::aggregate::cluster::TermCluster;

/// Members backed by a Wikidata-linked dictionary move to the front;
/// relative order is otherwise kept.
pub fn rank_members(cluster: &mut TermCluster) {
    cluster
        .members
        .sort_by_key(|m| m.term.dictionary_wikidata_id.is_none());
}

/// Order clusters for presentation.
///
/// Two stable passes: member count descending, then (distinct dictionary
/// count, total relevance) descending. The second pass decides; the first
/// only breaks its ties.
pub fn rank_clusters(clusters: &mut [TermCluster]) {
    clusters.sort_by(|a, b| b.len().cmp(&a.len()));
    clusters.sort_by(|a, b| {
        b.dictionary_count()
            .cmp(&a.dictionary_count())
            .then_with(|| {
                b.total_relevance
                    .partial_cmp(&a.total_relevance)
                    .unwrap_or(Ordering::Equal)
            })
    });
}
