use std::io::{self, Write};

use anyhow::Result;
use linkshelf_core::directory::cards_for;
use linkshelf_core::display::{DisplayLimits, LinkCard};
use linkshelf_core::{FilterState, FilterView, TagCount};
use serde::Serialize;

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub(super) fn print_json_stderr<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stderr = io::stderr().lock();
    serde_json::to_writer_pretty(&mut stderr, value)?;
    writeln!(stderr)?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub(super) struct TagChip {
    pub(super) tag: String,
    pub(super) count: usize,
    pub(super) label: String,
    pub(super) active: bool,
}

impl TagChip {
    pub(super) fn new(entry: &TagCount, state: &FilterState) -> Self {
        Self {
            active: state.is_tag_active(&entry.tag),
            label: entry.label(),
            tag: entry.tag.clone(),
            count: entry.count,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct SearchOutput {
    pub(super) search_term: String,
    pub(super) active_tags: Vec<String>,
    pub(super) total: usize,
    pub(super) filtered: usize,
    pub(super) no_results: bool,
    pub(super) popular_tags: Vec<TagChip>,
    pub(super) links: Vec<LinkCard>,
}

impl SearchOutput {
    pub(super) fn new(view: &FilterView, state: &FilterState, limits: &DisplayLimits) -> Self {
        Self {
            search_term: state.search_term().to_string(),
            active_tags: state.active_tags().iter().cloned().collect(),
            total: view.total,
            filtered: view.filtered,
            no_results: view.is_empty(),
            popular_tags: view
                .popular_tags
                .iter()
                .map(|entry| TagChip::new(entry, state))
                .collect(),
            links: cards_for(view, limits),
        }
    }
}
