use std::collections::BTreeSet;

use linkshelf_core::display::DisplayLimits;
use linkshelf_core::{LinkRecord, filter_links, rank_tags, shorten_display};
use proptest::prelude::*;

fn tag_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["rust", "Rust", "web", "db", "cli", "async"]).prop_map(String::from)
}

fn record_strategy() -> impl Strategy<Value = LinkRecord> {
    (
        "[A-Za-z ]{1,16}",
        prop::collection::vec(tag_strategy(), 0..4),
        0u32..28,
    )
        .prop_map(|(title, hashtags, day)| {
            LinkRecord::new(
                title,
                "https://example.com/",
                hashtags,
                format!("2024-02-{:02}", day + 1),
            )
        })
}

fn records_strategy() -> impl Strategy<Value = Vec<LinkRecord>> {
    prop::collection::vec(record_strategy(), 0..24)
}

fn tag_set_strategy() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(tag_strategy(), 1..4)
}

fn text_matches(record: &LinkRecord, term: &str) -> bool {
    record.title.to_lowercase().contains(term)
        || record
            .hashtags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term))
}

proptest! {
    #[test]
    fn empty_criteria_is_identity(records in records_strategy()) {
        prop_assert_eq!(filter_links(&records, "", &BTreeSet::new()), records);
    }

    #[test]
    fn search_partitions_records_exactly(records in records_strategy(), term in "[a-z]{1,3}") {
        let kept = filter_links(&records, &term, &BTreeSet::new());
        for record in &kept {
            prop_assert!(text_matches(record, &term));
        }
        let dropped = records.iter().filter(|record| !kept.contains(*record));
        for record in dropped {
            prop_assert!(!text_matches(record, &term));
        }
    }

    #[test]
    fn filtering_preserves_relative_order(records in records_strategy(), tags in tag_set_strategy()) {
        let kept = filter_links(&records, "", &tags);
        let mut cursor = records.iter();
        for record in &kept {
            prop_assert!(cursor.any(|candidate| candidate == record));
        }
    }

    #[test]
    fn tag_filter_is_monotonic(
        records in records_strategy(),
        first in tag_set_strategy(),
        second in tag_set_strategy(),
    ) {
        let narrow = filter_links(&records, "", &first);
        for record in &narrow {
            prop_assert!(record.hashtags.iter().any(|tag| first.contains(tag)));
        }
        let union = first.union(&second).cloned().collect::<BTreeSet<_>>();
        let wide = filter_links(&records, "", &union);
        prop_assert!(wide.len() >= narrow.len());
        for record in &narrow {
            prop_assert!(wide.contains(record));
        }
    }

    #[test]
    fn ranking_is_bounded_sorted_and_first_seen_stable(
        records in records_strategy(),
        top_n in 0usize..8,
    ) {
        let ranked = rank_tags(&records, top_n);
        prop_assert!(ranked.len() <= top_n);

        let first_seen = records
            .iter()
            .flat_map(|record| record.hashtags.iter())
            .fold(Vec::<&String>::new(), |mut seen, tag| {
                if !seen.contains(&tag) {
                    seen.push(tag);
                }
                seen
            });
        let position = |tag: &String| first_seen.iter().position(|seen| *seen == tag);

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
            if pair[0].count == pair[1].count {
                prop_assert!(position(&pair[0].tag) < position(&pair[1].tag));
            }
        }
    }

    #[test]
    fn shorten_never_panics_and_respects_fallback_bound(raw in "\\PC{0,80}") {
        let limits = DisplayLimits::default();
        let shortened = shorten_display(&raw, &limits);
        if url_parse_fails(&raw) {
            prop_assert!(shortened.chars().count() <= limits.max_total_chars);
        }
    }
}

fn url_parse_fails(raw: &str) -> bool {
    reqwest::Url::parse(raw).is_err()
}
