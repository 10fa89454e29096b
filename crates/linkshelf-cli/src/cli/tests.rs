use super::*;
use clap::Parser;

#[test]
fn search_parses_query_and_repeated_tags() {
    let cli = Cli::try_parse_from([
        "linkshelf", "search", "rust", "--tag", "web", "--tag", "cli", "--top", "3",
    ])
    .expect("parse");
    match cli.command {
        Commands::Search(SearchArgs { query, tags, top }) => {
            assert_eq!(query.as_deref(), Some("rust"));
            assert_eq!(tags, vec!["web".to_string(), "cli".to_string()]);
            assert_eq!(top, Some(3));
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn search_without_query_is_allowed() {
    let cli = Cli::try_parse_from(["linkshelf", "search", "--tag", "x"]).expect("parse");
    match cli.command {
        Commands::Search(SearchArgs { query, .. }) => assert!(query.is_none()),
        _ => panic!("expected search command"),
    }
}

#[test]
fn source_flag_is_global() {
    let cli = Cli::try_parse_from(["linkshelf", "tags", "--source", "links.json"]).expect("parse");
    assert_eq!(cli.source.as_deref(), Some("links.json"));
    assert!(matches!(cli.command, Commands::Tags(TagsArgs { top: None })));
}

#[test]
fn top_rejects_zero() {
    let parsed = Cli::try_parse_from(["linkshelf", "tags", "--top", "0"]);
    assert!(parsed.is_err(), "top=0 must be rejected");
}

#[test]
fn shorten_requires_url_argument() {
    assert!(Cli::try_parse_from(["linkshelf", "shorten"]).is_err());
}

#[test]
fn every_subcommand_has_help_text() {
    let command = <Cli as clap::CommandFactory>::command();
    for sub in command.get_subcommands() {
        assert!(
            sub.get_about().is_some(),
            "subcommand {} lacks help text",
            sub.get_name()
        );
    }
}
