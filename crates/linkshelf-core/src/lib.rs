// Public fallible APIs in this crate share one concrete error contract (`LinkError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod config;
pub mod directory;
pub mod display;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod store;
pub(crate) mod text;

pub use config::AppConfig;
pub use directory::{LinkDirectory, LoadPhase};
pub use display::{DisplayLimits, LinkCard, escape_for_display, shorten_display};
pub use error::{LinkError, Result};
pub use filter::{DEFAULT_TOP_TAGS, build_view, filter_links, rank_tags};
pub use loader::{LinkSource, LoaderConfig};
pub use models::{FilterState, FilterView, LinkRecord, TagCount};
pub use store::LinkStore;
