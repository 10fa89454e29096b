use serde::{Deserialize, Serialize};

use super::LinkRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

impl TagCount {
    #[must_use]
    pub fn label(&self) -> String {
        format!("#{} ({})", self.tag, self.count)
    }
}

/// Everything the presentation layer needs for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterView {
    pub links: Vec<LinkRecord>,
    pub total: usize,
    pub filtered: usize,
    pub popular_tags: Vec<TagCount>,
}

impl FilterView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_error: Option<(usize, String)>,
}
