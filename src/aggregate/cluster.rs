use crate::term::{Identifier, RawTerm};
use serde::Serialize;

/// A member of a cluster: the original record plus its own normalized key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    #[serde(flatten)]
    pub term: RawTerm,
    pub arabic_normalised: String,
}

/// Entries believed to denote the same concept.
///
/// Serializes to the wire shape consumed by the front end: `arabic_normalised`,
/// `occurrences`, `dictionary_ids`, `english_normalised`, `french_normalised`
/// (omitted when no member has French) and `total_relevance`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermCluster {
    #[serde(rename = "arabic_normalised")]
    pub arabic_key: String,
    #[serde(rename = "occurrences")]
    pub members: Vec<Occurrence>,
    /// Distinct source dictionaries, in order of first appearance.
    pub dictionary_ids: Vec<Identifier>,
    #[serde(rename = "english_normalised")]
    pub english_canonical: String,
    #[serde(rename = "french_normalised", skip_serializing_if = "Option::is_none")]
    pub french_canonical: Option<String>,
    pub total_relevance: f64,
}

impl TermCluster {
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn dictionary_count(&self) -> usize {
        self.dictionary_ids.len()
    }
}
