mod filter;
mod link;
mod view;

pub use filter::FilterState;
pub use link::{LinkRecord, parse_timestamp};
pub use view::{FilterView, LoadReport, TagCount};
