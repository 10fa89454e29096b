use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// One entry of the link directory, exactly as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_created_at")]
    pub created_at: String,
}

impl LinkRecord {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        hashtags: impl IntoIterator<Item = impl Into<String>>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            hashtags: hashtags.into_iter().map(Into::into).collect(),
            created_at: created_at.into(),
        }
    }

    /// Parsed creation time. `None` means the record sorts as the oldest.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    #[must_use]
    pub fn has_any_tag<'a>(&self, tags: impl IntoIterator<Item = &'a String>) -> bool {
        tags.into_iter().any(|wanted| self.hashtags.contains(wanted))
    }
}

/// Never rejects a record. Numbers are epoch milliseconds; `null` and other
/// non-string values become the empty string and sort as the oldest.
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::String(text) => text,
        Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map_or_else(
                || number.to_string(),
                |created| created.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        _ => String::new(),
    })
}

/// Offset-less forms are read as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }
    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(raw, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
    })
}
