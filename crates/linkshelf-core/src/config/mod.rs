use crate::display::{DEFAULT_MAX_PATH_CHARS, DEFAULT_MAX_TOTAL_CHARS, DisplayLimits};
use crate::filter::DEFAULT_TOP_TAGS;
use crate::loader::{DEFAULT_DATA_SOURCE, DEFAULT_FETCH_TIMEOUT_MS, LoaderConfig};

mod env;

pub const ENV_DATA_SOURCE: &str = "LINKSHELF_DATA_SOURCE";
pub const ENV_FETCH_TIMEOUT_MS: &str = "LINKSHELF_FETCH_TIMEOUT_MS";
pub const ENV_TOP_TAGS: &str = "LINKSHELF_TOP_TAGS";
pub const ENV_URL_MAX_PATH_CHARS: &str = "LINKSHELF_URL_MAX_PATH_CHARS";
pub const ENV_URL_MAX_TOTAL_CHARS: &str = "LINKSHELF_URL_MAX_TOTAL_CHARS";

// Anything shorter cannot hold a character plus the ellipsis.
const MIN_DISPLAY_CHARS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub loader: LoaderConfig,
    pub display: DisplayLimits,
    pub top_tags: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            display: DisplayLimits::default(),
            top_tags: DEFAULT_TOP_TAGS,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            loader: LoaderConfig::from_env(),
            display: DisplayLimits::from_env(),
            top_tags: env::read_env_usize(ENV_TOP_TAGS, DEFAULT_TOP_TAGS, 1),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.loader.source = source.into();
        self
    }
}

impl LoaderConfig {
    #[must_use]
    fn from_env() -> Self {
        Self {
            source: env::read_non_empty_env(ENV_DATA_SOURCE)
                .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string()),
            timeout_ms: env::read_env_u64(ENV_FETCH_TIMEOUT_MS, DEFAULT_FETCH_TIMEOUT_MS, 1),
        }
    }
}

impl DisplayLimits {
    #[must_use]
    fn from_env() -> Self {
        Self {
            max_path_chars: env::read_env_usize(
                ENV_URL_MAX_PATH_CHARS,
                DEFAULT_MAX_PATH_CHARS,
                MIN_DISPLAY_CHARS,
            ),
            max_total_chars: env::read_env_usize(
                ENV_URL_MAX_TOTAL_CHARS,
                DEFAULT_MAX_TOTAL_CHARS,
                MIN_DISPLAY_CHARS,
            ),
        }
    }
}
