//! Canonical gloss election and per-cluster statistics.

use smallvec::SmallVec;

use crate::aggregate::cluster::TermCluster;
use crate::aggregate::group::TermGroup;
use crate::error::AggregateError;
use crate::normalize::{normalize_english, normalize_french};
use crate::term::Identifier;

/// Insertion-ordered frequency tally.
///
/// Clusters hold a handful of members, so a linear scan over a small inline
/// vector beats hashing, and it keeps first-seen order for the tie-break.
#[derive(Debug, Default)]
pub struct Tally {
    counts: SmallVec<[(String, usize); 4]>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: String) {
        match self.counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((value, 1)),
        }
    }

    /// Plurality winner. Scans in first-seen order and only replaces the
    /// leader on a strictly greater count, so ties go to the earliest value.
    pub fn winner(self) -> Option<String> {
        let mut best: Option<(String, usize)> = None;
        for (value, count) in self.counts {
            if best.as_ref().is_none_or(|(_, top)| count > *top) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
    }
}

impl FromIterator<String> for Tally {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for value in iter {
            tally.record(value);
        }
        tally
    }
}

/// Turn a group into a cluster: elect glosses, collect dictionaries, sum
/// relevance. Member order is left as grouped.
///
/// # Errors
///
/// [`AggregateError::MalformedInput`] on `relevance` when the members' sum
/// overflows to infinity, reported at the record that opened the group.
pub fn elect(group: TermGroup) -> Result<TermCluster, AggregateError> {
    let total_relevance: f64 = group.members.iter().map(|m| m.term.relevance).sum();
    if !total_relevance.is_finite() {
        return Err(AggregateError::MalformedInput {
            index: group.first_index,
            field: "relevance",
            reason: format!(
                "sum over the {} records keyed `{}` is not finite",
                group.members.len(),
                group.arabic_key
            ),
        });
    }

    let english_canonical = group
        .members
        .iter()
        .map(|m| normalize_english(&m.term.english))
        .collect::<Tally>()
        .winner()
        .unwrap_or_default();

    let french_canonical = group
        .members
        .iter()
        .filter_map(|m| m.term.french_gloss())
        .map(normalize_french)
        .collect::<Tally>()
        .winner();

    let mut dictionary_ids: Vec<Identifier> = Vec::new();
    for member in &group.members {
        if !dictionary_ids.contains(&member.term.dictionary_id) {
            dictionary_ids.push(member.term.dictionary_id.clone());
        }
    }

    Ok(TermCluster {
        arabic_key: group.arabic_key,
        members: group.members,
        dictionary_ids,
        english_canonical,
        french_canonical,
        total_relevance,
    })
}
