use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::display::{DisplayLimits, LinkCard};
use crate::error::Result;
use crate::filter::{build_view, rank_tags};
use crate::loader::{load_failure_message, load_store};
use crate::models::{FilterState, FilterView, TagCount};
use crate::store::LinkStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed,
}

/// Holds the current load cycle's store. The only mutable state is the
/// store reference itself, swapped wholesale on reload.
#[derive(Debug, Clone)]
pub struct LinkDirectory {
    config: AppConfig,
    store: LinkStore,
    phase: LoadPhase,
}

impl LinkDirectory {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: LinkStore::empty(),
            phase: LoadPhase::Loading,
        }
    }

    /// Builds a directory and performs the first load.
    pub fn open(config: AppConfig) -> Result<Self> {
        let mut directory = Self::new(config);
        directory.reload()?;
        Ok(directory)
    }

    #[must_use]
    pub fn with_store(config: AppConfig, store: LinkStore) -> Self {
        Self {
            config,
            store,
            phase: LoadPhase::Ready,
        }
    }

    /// Replaces the store. On failure the directory is left empty and
    /// `Failed` until the next reload.
    pub fn reload(&mut self) -> Result<&LinkStore> {
        self.phase = LoadPhase::Loading;
        let loaded = self
            .config
            .loader
            .resolve_source()
            .and_then(|source| load_store(&source, self.config.loader.timeout()));
        match loaded {
            Ok(store) => {
                self.store = store;
                self.phase = LoadPhase::Ready;
                Ok(&self.store)
            }
            Err(err) => {
                self.store = LinkStore::empty();
                self.phase = LoadPhase::Failed;
                Err(err)
            }
        }
    }

    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        self.phase
    }

    #[must_use]
    pub const fn store(&self) -> &LinkStore {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self, state: &FilterState) -> FilterView {
        build_view(&self.store, state, self.config.top_tags)
    }

    #[must_use]
    pub fn popular_tags(&self) -> Vec<TagCount> {
        rank_tags(self.store.records(), self.config.top_tags)
    }

    #[must_use]
    pub fn cards(&self, view: &FilterView) -> Vec<LinkCard> {
        cards_for(view, &self.config.display)
    }

    #[must_use]
    pub fn failure_message(&self) -> String {
        load_failure_message(&self.config.loader.source)
    }
}

#[must_use]
pub fn cards_for(view: &FilterView, limits: &DisplayLimits) -> Vec<LinkCard> {
    view.links
        .iter()
        .map(|record| LinkCard::from_record(record, limits))
        .collect()
}
