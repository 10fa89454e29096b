use clap::{Parser, Subcommand};

mod args;

#[cfg(test)]
mod tests;

pub use args::{EscapeArgs, SearchArgs, ShortenArgs, TagsArgs};

#[derive(Debug, Parser)]
#[command(name = "linkshelf")]
#[command(about = "Search and filter a tagged link directory", version)]
pub struct Cli {
    /// Link data file path or HTTP(S) URL. Overrides `LINKSHELF_DATA_SOURCE`.
    #[arg(long, global = true)]
    pub source: Option<String>,

    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Every link, newest first.
    List,
    /// Filter links by text and hashtags.
    Search(SearchArgs),
    /// Most frequent hashtags across all links.
    Tags(TagsArgs),
    /// Compact display form of a URL.
    Shorten(ShortenArgs),
    /// HTML-escape text for display.
    Escape(EscapeArgs),
}
