use std::fmt::{Display, Formatter};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;

use crate::error::{LinkError, Result};
use crate::store::LinkStore;

pub const DEFAULT_DATA_SOURCE: &str = "data/links.json";
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub source: String,
    pub timeout_ms: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATA_SOURCE.to_string(),
            timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl LoaderConfig {
    pub fn resolve_source(&self) -> Result<LinkSource> {
        LinkSource::parse(&self.source)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Where the link data file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkSource {
    File(PathBuf),
    Http(Url),
}

impl LinkSource {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LinkError::Validation(
                "link data source must not be empty".to_string(),
            ));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(trimmed).map_err(|err| {
                LinkError::Validation(format!("invalid link data url {trimmed}: {err}"))
            })?;
            return Ok(Self::Http(url));
        }
        Ok(Self::File(PathBuf::from(trimmed)))
    }
}

impl Display for LinkSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => f.write_str(url.as_str()),
        }
    }
}

/// Reads the raw data file once. There is no retry: a failure here means the
/// caller shows zero links until it asks for another load.
pub fn fetch_source_text(source: &LinkSource, timeout: Duration) -> Result<String> {
    match source {
        LinkSource::File(path) => {
            if !path.exists() {
                return Err(LinkError::NotFound(path.display().to_string()));
            }
            Ok(fs::read_to_string(path)?)
        }
        LinkSource::Http(url) => {
            let http = Client::builder().timeout(timeout).build()?;
            let resp = http.get(url.clone()).send()?;
            if !resp.status().is_success() {
                return Err(LinkError::FetchStatus {
                    status: resp.status().as_u16(),
                    source_location: url.to_string(),
                });
            }
            Ok(resp.text()?)
        }
    }
}

pub fn load_store(source: &LinkSource, timeout: Duration) -> Result<LinkStore> {
    tracing::debug!(%source, "loading link data");
    let raw = fetch_source_text(source, timeout).inspect_err(|err| {
        tracing::warn!(%source, code = err.code(), error = %err, "link data fetch failed");
    })?;
    let store = LinkStore::from_json_str(&raw).inspect_err(|err| {
        tracing::warn!(%source, code = err.code(), error = %err, "link data rejected");
    })?;
    tracing::info!(
        %source,
        loaded = store.report().loaded,
        skipped = store.report().skipped,
        "link data loaded"
    );
    Ok(store)
}

/// User-facing explanation for a failed load.
#[must_use]
pub fn load_failure_message(source: &str) -> String {
    format!(
        "Could not load link data. Check that {source} exists and is a JSON array of links \
         or an object with a \"links\" array."
    )
}
