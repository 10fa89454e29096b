use anyhow::{Context, Result};
use linkshelf_core::directory::cards_for;
use linkshelf_core::{
    AppConfig, FilterState, LinkDirectory, build_view, escape_for_display, shorten_display,
};
use serde_json::{Value, json};

use crate::cli::Commands;

mod support;

#[cfg(test)]
mod tests;

use self::support::{SearchOutput, TagChip, print_json, print_json_stderr};

pub(crate) fn run(source: Option<&str>, command: Commands) -> Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(source) = source {
        config = config.with_source(source);
    }

    if !command_needs_data(&command) {
        return print_json(&render_offline(&config, &command)?);
    }

    let directory = open_directory(config)?;
    print_json(&render(&directory, &command)?)
}

fn open_directory(config: AppConfig) -> Result<LinkDirectory> {
    let source = config.loader.source.clone();
    let mut directory = LinkDirectory::new(config);
    if let Err(err) = directory.reload() {
        tracing::error!(%source, code = err.code(), error = %err, "link data load failed");
        let kind = if err.is_transport() { "transport" } else { "data" };
        print_json_stderr(&json!({
            "message": directory.failure_message(),
            "kind": kind,
            "error": err.to_payload("load", Some(source.clone())),
        }))?;
        return Err(err).with_context(|| format!("failed to load link data from {source}"));
    }
    Ok(directory)
}

pub(super) const fn command_needs_data(command: &Commands) -> bool {
    !matches!(command, Commands::Shorten(_) | Commands::Escape(_))
}

fn render_offline(config: &AppConfig, command: &Commands) -> Result<Value> {
    match command {
        Commands::Shorten(args) => Ok(json!({
            "url": args.url,
            "display": shorten_display(&args.url, &config.display),
        })),
        Commands::Escape(args) => Ok(json!({
            "text": args.text,
            "escaped": escape_for_display(&args.text),
        })),
        other => anyhow::bail!("{other:?} requires link data"),
    }
}

fn render(directory: &LinkDirectory, command: &Commands) -> Result<Value> {
    let config = directory.config();
    let value = match command {
        Commands::List => {
            let view = directory.view(&FilterState::default());
            serde_json::to_value(cards_for(&view, &config.display))?
        }
        Commands::Search(args) => {
            let state = FilterState::new(args.query.as_deref().unwrap_or_default(), &args.tags);
            let top_n = args.top.unwrap_or(config.top_tags);
            let view = build_view(directory.store(), &state, top_n);
            tracing::debug!(
                search_term = state.search_term(),
                active_tags = state.active_tags().len(),
                filtered = view.filtered,
                "search evaluated"
            );
            serde_json::to_value(SearchOutput::new(&view, &state, &config.display))?
        }
        Commands::Tags(args) => {
            let state = FilterState::default();
            let ranked = linkshelf_core::rank_tags(
                directory.store().records(),
                args.top.unwrap_or(config.top_tags),
            );
            let chips = ranked
                .iter()
                .map(|entry| TagChip::new(entry, &state))
                .collect::<Vec<_>>();
            serde_json::to_value(chips)?
        }
        Commands::Shorten(_) | Commands::Escape(_) => render_offline(config, command)?,
    };
    Ok(value)
}
