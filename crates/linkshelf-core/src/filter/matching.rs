use std::collections::BTreeSet;

use crate::models::LinkRecord;
use crate::text::normalize_search_term;

/// Search text and tag selection after normalization. Empty parts match
/// every record.
#[derive(Debug)]
pub(super) struct NormalizedCriteria<'a> {
    pub(super) term: String,
    pub(super) tags: &'a BTreeSet<String>,
}

impl<'a> NormalizedCriteria<'a> {
    pub(super) fn new(search_term: &str, active_tags: &'a BTreeSet<String>) -> Self {
        Self {
            term: normalize_search_term(search_term),
            tags: active_tags,
        }
    }

    pub(super) fn is_unconstrained(&self) -> bool {
        self.term.is_empty() && self.tags.is_empty()
    }

    pub(super) fn matches(&self, record: &LinkRecord) -> bool {
        (self.term.is_empty() || matches_text(record, &self.term))
            && (self.tags.is_empty() || record.has_any_tag(self.tags))
    }
}

/// `term` must already be lowercased.
pub(super) fn matches_text(record: &LinkRecord, term: &str) -> bool {
    record.title.to_lowercase().contains(term)
        || record
            .hashtags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term))
}
