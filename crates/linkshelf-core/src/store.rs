use std::cmp::Reverse;

use serde_json::Value;

use crate::error::{LinkError, Result};
use crate::models::{LinkRecord, LoadReport};

const LINKS_FIELD: &str = "links";

/// The canonical, date-sorted record collection for one load cycle.
///
/// A store is never patched in place: a reload builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkStore {
    records: Vec<LinkRecord>,
    report: LoadReport,
}

impl LinkStore {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Accepts either a bare array of records or an object carrying a
    /// `links` array. An object without `links` yields an empty store.
    pub fn load(value: Value) -> Result<Self> {
        let elements = match value {
            Value::Array(elements) => elements,
            Value::Object(mut object) => match object.remove(LINKS_FIELD) {
                None => {
                    tracing::warn!("link data object has no `links` field; treating as empty");
                    Vec::new()
                }
                Some(Value::Array(elements)) => elements,
                Some(other) => {
                    return Err(LinkError::InputShape(format!(
                        "`links` must be an array, got {}",
                        value_kind(&other)
                    )));
                }
            },
            other => {
                return Err(LinkError::InputShape(format!(
                    "expected an array of links or an object with a `links` array, got {}",
                    value_kind(&other)
                )));
            }
        };

        let outcome = parse_records_tolerant(elements);
        if outcome.items.is_empty() && outcome.skipped > 0 {
            return Err(all_records_invalid(outcome.skipped, outcome.first_error.as_ref()));
        }
        if let Some((index, message)) = &outcome.first_error {
            tracing::warn!(
                skipped = outcome.skipped,
                first_index = index,
                first_error = %message,
                "skipped malformed link records"
            );
        }

        Ok(Self::from_records_with_report(
            outcome.items,
            outcome.skipped,
            outcome.first_error,
        ))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value = serde_json::from_str::<Value>(raw)?;
        Self::load(value)
    }

    #[must_use]
    pub fn from_records(records: Vec<LinkRecord>) -> Self {
        Self::from_records_with_report(records, 0, None)
    }

    fn from_records_with_report(
        mut records: Vec<LinkRecord>,
        skipped: usize,
        first_error: Option<(usize, String)>,
    ) -> Self {
        sort_newest_first(&mut records);
        let report = LoadReport {
            loaded: records.len(),
            skipped,
            first_error,
        };
        tracing::debug!(loaded = report.loaded, skipped = report.skipped, "link store built");
        Self { records, report }
    }

    #[must_use]
    pub fn records(&self) -> &[LinkRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub const fn report(&self) -> &LoadReport {
        &self.report
    }
}

/// Stable: records with equal timestamps keep their input order, and
/// unparseable timestamps sink to the end.
pub fn sort_newest_first(records: &mut [LinkRecord]) {
    records.sort_by_cached_key(|record| Reverse(record.created_at_utc()));
}

struct RecordParseOutcome {
    items: Vec<LinkRecord>,
    skipped: usize,
    first_error: Option<(usize, String)>,
}

fn parse_records_tolerant(elements: Vec<Value>) -> RecordParseOutcome {
    let mut items = Vec::with_capacity(elements.len());
    let mut skipped = 0usize;
    let mut first_error = None::<(usize, String)>;

    for (index, element) in elements.into_iter().enumerate() {
        let parsed = serde_json::from_value::<LinkRecord>(element)
            .map_err(|err| err.to_string())
            .and_then(|record| {
                if record.title.trim().is_empty() {
                    Err("title must not be empty".to_string())
                } else {
                    Ok(record)
                }
            });
        match parsed {
            Ok(record) => items.push(record),
            Err(message) => {
                skipped += 1;
                if first_error.is_none() {
                    first_error = Some((index, message));
                }
            }
        }
    }

    RecordParseOutcome {
        items,
        skipped,
        first_error,
    }
}

fn all_records_invalid(skipped: usize, first_error: Option<&(usize, String)>) -> LinkError {
    if let Some((index, message)) = first_error {
        return LinkError::Validation(format!(
            "link data parse failed: skipped {skipped} invalid records (first at index {index}: {message})"
        ));
    }
    LinkError::Validation(format!(
        "link data parse failed: skipped {skipped} invalid records"
    ))
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
