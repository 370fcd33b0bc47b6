//! Partition records by normalized Arabic headword.

use std::collections::HashMap;

use crate::aggregate::cluster::Occurrence;
use crate::normalize::normalize_arabic;
use crate::term::RawTerm;

/// Records sharing one normalized headword, before election and ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct TermGroup {
    pub arabic_key: String,
    /// Input position of the record that opened the group.
    pub first_index: usize,
    pub members: Vec<Occurrence>,
}

/// Single stable pass: a key seen for the first time opens a group at the
/// end of the output; members keep input order.
///
/// Every record lands in exactly one group. The empty key is a valid key:
/// all headwords erased by normalization share one group.
pub fn group(terms: Vec<RawTerm>) -> Vec<TermGroup> {
    let mut groups: Vec<TermGroup> = Vec::new();
    // key → position in `groups`
    let mut slots: HashMap<String, usize> = HashMap::new();

    for (index, term) in terms.into_iter().enumerate() {
        let key = normalize_arabic(&term.arabic);
        let slot = *slots.entry(key.clone()).or_insert_with(|| {
            groups.push(TermGroup {
                arabic_key: key.clone(),
                first_index: index,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(Occurrence {
            term,
            arabic_normalised: key,
        });
    }

    groups
}
