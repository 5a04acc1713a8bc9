//! Orchestration of the match pipeline.
//!
//! `MatchEngine` is the surface the host calls: check a company name,
//! force a roster refresh, read and update settings. Host navigation events
//! arrive through `handle_context_change`, which reports through a
//! `CheckListener` instead of returning.

use std::sync::Arc;

use crate::cache::{Clock, RosterCache, SystemClock};
use crate::error::LayoffWatchError;
use crate::matcher;
use crate::normalize;
use crate::settings::{self, Settings, SettingsPatch};
use crate::store::RecordStore;

/// Receives the outcome of context-change driven checks.
pub trait CheckListener: Send + Sync {
    /// A check completed; `matched` says whether the company is on the roster.
    fn on_check_result(&self, company: &str, matched: bool);
    /// A check could not complete (roster fetch failed).
    fn on_check_failed(&self, company: &str, error: &LayoffWatchError);
}

/// Company-match engine over an injected record store and clock.
pub struct MatchEngine {
    store: Arc<dyn RecordStore>,
    cache: RosterCache,
    listener: Option<Arc<dyn CheckListener>>,
}

impl MatchEngine {
    /// Creates an engine using the production roster export and wall clock.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self {
            cache: RosterCache::new(Arc::clone(&store), clock),
            store,
            listener: None,
        }
    }

    /// Creates an engine against a custom export base URL and clock.
    /// Used for testing with wiremock.
    pub fn with_base_url(
        base_url: &str,
        store: Arc<dyn RecordStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cache: RosterCache::with_base_url(base_url, Arc::clone(&store), clock),
            store,
            listener: None,
        }
    }

    /// Attaches a listener for `handle_context_change` outcomes.
    pub fn with_listener(mut self, listener: Arc<dyn CheckListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Decides whether `raw_name` is on the roster under the current settings.
    ///
    /// An empty name normalizes to an empty key and matches nothing; the only
    /// error path is a failed roster fetch.
    pub async fn check_company(&self, raw_name: &str) -> Result<bool, LayoffWatchError> {
        let settings = self.settings();
        let target = normalize::normalize(raw_name, settings.remove_suffixes);
        let candidates = self.cache.candidates(&settings).await?;

        Ok(candidates.iter().any(|candidate| {
            let key = normalize::normalize(candidate, settings.remove_suffixes);
            matcher::is_match(&target, &key, settings.fuzzy_matching)
        }))
    }

    /// Clears the cached roster and eagerly repopulates it.
    pub async fn refresh_cache(&self) -> Result<(), LayoffWatchError> {
        self.cache.invalidate().await;
        let settings = self.settings();
        self.cache.candidates(&settings).await?;
        Ok(())
    }

    /// Returns the current settings snapshot.
    pub fn settings(&self) -> Settings {
        settings::load_settings(self.store.as_ref())
    }

    /// Merges a partial update into the stored settings.
    pub fn save_settings(&self, patch: &SettingsPatch) -> Result<Settings, LayoffWatchError> {
        settings::save_settings(self.store.as_ref(), patch)
    }

    /// Host notification entry point: re-runs the check for the company now
    /// in context and reports the outcome through the listener.
    pub async fn handle_context_change(&self, raw_name: &str) {
        match self.check_company(raw_name).await {
            Ok(matched) => {
                if let Some(listener) = &self.listener {
                    listener.on_check_result(raw_name, matched);
                }
            }
            Err(e) => {
                tracing::error!("Company check failed for {:?}: {}", raw_name, e);
                if let Some(listener) = &self.listener {
                    listener.on_check_failed(raw_name, &e);
                }
            }
        }
    }
}
