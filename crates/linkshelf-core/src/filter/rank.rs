use std::collections::HashMap;

use crate::models::{LinkRecord, TagCount};

/// Counts every hashtag across `records` and keeps the `top_n` most
/// frequent. Equal counts keep first-seen order.
#[must_use]
pub fn rank_tags(records: &[LinkRecord], top_n: usize) -> Vec<TagCount> {
    let mut slots = HashMap::<&str, usize>::new();
    let mut counts = Vec::<TagCount>::new();

    for tag in records.iter().flat_map(|record| record.hashtags.iter()) {
        if let Some(&slot) = slots.get(tag.as_str()) {
            counts[slot].count += 1;
            continue;
        }
        slots.insert(tag.as_str(), counts.len());
        counts.push(TagCount {
            tag: tag.clone(),
            count: 1,
        });
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);
    counts
}
