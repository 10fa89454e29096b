use chrono::Datelike;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::models::LinkRecord;
use crate::text::clip_to_limit;

pub const DEFAULT_MAX_PATH_CHARS: usize = 30;
pub const DEFAULT_MAX_TOTAL_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLimits {
    pub max_path_chars: usize,
    pub max_total_chars: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            max_path_chars: DEFAULT_MAX_PATH_CHARS,
            max_total_chars: DEFAULT_MAX_TOTAL_CHARS,
        }
    }
}

/// Compact `host/path` form of a link for display. Never fails: input that
/// does not parse as a URL is clipped as plain text instead.
#[must_use]
pub fn shorten_display(url: &str, limits: &DisplayLimits) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return clip_to_limit(url, limits.max_total_chars);
    };

    let host = parsed.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    let path = clip_to_limit(parsed.path(), limits.max_path_chars);
    format!("{host}{path}")
}

#[must_use]
pub fn escape_for_display(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Japanese short date (`2024年1月1日`); falls back to the raw value when the
/// timestamp does not parse.
#[must_use]
pub fn format_display_date(record: &LinkRecord) -> String {
    record.created_at_utc().map_or_else(
        || record.created_at.trim().to_string(),
        |created| {
            format!(
                "{}年{}月{}日",
                created.year(),
                created.month(),
                created.day()
            )
        },
    )
}

#[must_use]
pub fn hashtag_label(tag: &str) -> String {
    format!("#{tag}")
}

/// A record prepared for rendering: every record-supplied string is escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCard {
    pub title: String,
    pub href: String,
    pub display_url: String,
    pub tags: Vec<String>,
    pub date: String,
}

impl LinkCard {
    #[must_use]
    pub fn from_record(record: &LinkRecord, limits: &DisplayLimits) -> Self {
        Self {
            title: escape_for_display(&record.title),
            href: escape_for_display(&record.url),
            display_url: escape_for_display(&shorten_display(&record.url, limits)),
            tags: record
                .hashtags
                .iter()
                .map(|tag| escape_for_display(&hashtag_label(tag)))
                .collect(),
            date: escape_for_display(&format_display_date(record)),
        }
    }
}
