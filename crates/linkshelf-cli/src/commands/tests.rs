use linkshelf_core::{AppConfig, LinkDirectory, LinkRecord, LinkStore};

use super::{command_needs_data, render, render_offline};
use crate::cli::{Commands, EscapeArgs, SearchArgs, ShortenArgs, TagsArgs};

fn sample_directory() -> LinkDirectory {
    let store = LinkStore::from_records(vec![
        LinkRecord::new("Alpha", "https://a.com", ["x", "y"], "2024-01-01"),
        LinkRecord::new("Beta <beta>", "https://www.b.com/docs", ["y"], "2024-06-01"),
    ]);
    LinkDirectory::with_store(AppConfig::default(), store)
}

#[test]
fn shorten_and_escape_do_not_need_link_data() {
    assert!(!command_needs_data(&Commands::Shorten(ShortenArgs {
        url: "https://a.com".to_string(),
    })));
    assert!(!command_needs_data(&Commands::Escape(EscapeArgs {
        text: "<b>".to_string(),
    })));
    assert!(command_needs_data(&Commands::List));
}

#[test]
fn list_renders_escaped_cards_newest_first() {
    let value = render(&sample_directory(), &Commands::List).expect("render list");
    let cards = value.as_array().expect("cards");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["title"], "Beta &lt;beta&gt;");
    assert_eq!(cards[0]["display_url"], "b.com/docs");
    assert_eq!(cards[1]["tags"][0], "#x");
}

#[test]
fn search_renders_counts_and_active_chips() {
    let command = Commands::Search(SearchArgs {
        query: None,
        tags: vec!["x".to_string()],
        top: None,
    });
    let value = render(&sample_directory(), &command).expect("render search");
    assert_eq!(value["total"], 2);
    assert_eq!(value["filtered"], 1);
    assert_eq!(value["no_results"], false);
    assert_eq!(value["links"][0]["title"], "Alpha");
    assert_eq!(value["popular_tags"][0]["label"], "#y (2)");
    assert_eq!(value["popular_tags"][0]["active"], false);
    assert_eq!(value["popular_tags"][1]["active"], true);
}

#[test]
fn search_with_no_matches_flags_empty_result() {
    let command = Commands::Search(SearchArgs {
        query: Some("zzz".to_string()),
        tags: Vec::new(),
        top: Some(1),
    });
    let value = render(&sample_directory(), &command).expect("render search");
    assert_eq!(value["filtered"], 0);
    assert_eq!(value["no_results"], true);
    assert_eq!(value["popular_tags"].as_array().map(Vec::len), Some(1));
}

#[test]
fn tags_respects_top_override() {
    let command = Commands::Tags(TagsArgs { top: Some(1) });
    let value = render(&sample_directory(), &command).expect("render tags");
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["tag"], "y");
}

#[test]
fn offline_commands_use_display_helpers() {
    let config = AppConfig::default();
    let shorten = render_offline(
        &config,
        &Commands::Shorten(ShortenArgs {
            url: "https://www.example.com/path".to_string(),
        }),
    )
    .expect("shorten");
    assert_eq!(shorten["display"], "example.com/path");

    let escape = render_offline(
        &config,
        &Commands::Escape(EscapeArgs {
            text: "a & b".to_string(),
        }),
    )
    .expect("escape");
    assert_eq!(escape["escaped"], "a &amp; b");
}
