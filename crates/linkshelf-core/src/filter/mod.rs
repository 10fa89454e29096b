//! The filter engine: pure functions from a record collection and filter
//! criteria to an ordered view. Nothing here holds state between calls.

use std::collections::BTreeSet;

use crate::models::{FilterState, FilterView, LinkRecord};
use crate::store::LinkStore;

mod matching;
mod rank;

use matching::NormalizedCriteria;
pub use rank::rank_tags;

pub const DEFAULT_TOP_TAGS: usize = 10;

/// Keeps the records whose title or hashtags contain `search_term`
/// (case-insensitive) and which carry at least one of `active_tags`.
/// Empty criteria match everything. Input order is preserved.
#[must_use]
pub fn filter_links(
    records: &[LinkRecord],
    search_term: &str,
    active_tags: &BTreeSet<String>,
) -> Vec<LinkRecord> {
    let criteria = NormalizedCriteria::new(search_term, active_tags);
    if criteria.is_unconstrained() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

/// Tag ranking always reflects the whole store, never the filtered subset.
#[must_use]
pub fn build_view(store: &LinkStore, state: &FilterState, top_n: usize) -> FilterView {
    let links = state.apply(store.records());
    FilterView {
        total: store.len(),
        filtered: links.len(),
        links,
        popular_tags: rank_tags(store.records(), top_n),
    }
}

impl FilterState {
    #[must_use]
    pub fn apply(&self, records: &[LinkRecord]) -> Vec<LinkRecord> {
        filter_links(records, self.search_term(), self.active_tags())
    }
}
