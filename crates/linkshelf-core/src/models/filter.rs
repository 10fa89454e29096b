use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::text::normalize_search_term;

/// Search text and selected hashtags. Owned by the caller; the engine only
/// ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    search_term: String,
    #[serde(default)]
    active_tags: BTreeSet<String>,
}

impl FilterState {
    #[must_use]
    pub fn new(search: &str, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            search_term: normalize_search_term(search),
            active_tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn active_tags(&self) -> &BTreeSet<String> {
        &self.active_tags
    }

    pub fn set_search(&mut self, raw: &str) {
        self.search_term = normalize_search_term(raw);
    }

    /// Returns whether `tag` is active after the toggle.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.active_tags.remove(tag) {
            return false;
        }
        self.active_tags.insert(tag.to_string());
        true
    }

    #[must_use]
    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tags.contains(tag)
    }

    /// Resets both the search text and every active tag.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.active_tags.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.active_tags.is_empty()
    }
}
