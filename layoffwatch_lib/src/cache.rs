//! TTL-cached access to the roster company list.
//!
//! The cache owns the single stored roster record: serve it while it is
//! younger than the configured TTL, refetch and replace it wholesale
//! otherwise. A failed refetch leaves the store untouched.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use layoffwatch_api::Client;

use crate::error::LayoffWatchError;
use crate::roster;
use crate::settings::Settings;
use crate::store::RecordStore;

/// Record key for the cached roster.
pub const ROSTER_CACHE_KEY: &str = "rosterCache";

/// Time source injected into the cache so TTL decisions are testable.
pub trait Clock: Send + Sync {
    /// Current time as epoch milliseconds.
    fn now_ms(&self) -> i64;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Stored roster snapshot with its fetch timestamp (epoch milliseconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub fetched_at: i64,
    pub items: Vec<String>,
}

/// Cached roster reader.
///
/// The read/decide/write sequence runs under a mutex held across the fetch,
/// so `invalidate` never observes a torn entry and callers racing on an
/// expired entry wait for the in-flight fetch instead of spawning their own.
pub struct RosterCache {
    client: Client,
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
    refresh: Mutex<()>,
}

impl RosterCache {
    /// Creates a cache reading from the production roster export.
    pub fn new(store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            client: Client::new(),
            store,
            clock,
            refresh: Mutex::new(()),
        }
    }

    /// Creates a cache with a custom export base URL. Used for testing with wiremock.
    pub fn with_base_url(
        base_url: &str,
        store: Arc<dyn RecordStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client: Client::with_base_url(base_url),
            store,
            clock,
            refresh: Mutex::new(()),
        }
    }

    /// Returns the candidate list, serving the stored entry while it is
    /// younger than `settings.cache_ttl_minutes` and refetching otherwise.
    pub async fn candidates(&self, settings: &Settings) -> Result<Vec<String>, LayoffWatchError> {
        let _guard = self.refresh.lock().await;

        if let Some(entry) = self.read_entry() {
            let age_ms = self.clock.now_ms() - entry.fetched_at;
            let ttl_ms = i64::from(settings.cache_ttl_minutes) * 60_000;
            if age_ms < ttl_ms {
                tracing::debug!(
                    "Serving roster from cache ({} companies, age {}s)",
                    entry.items.len(),
                    age_ms / 1000
                );
                return Ok(entry.items);
            }
        }

        self.refetch().await
    }

    /// Clears the stored entry so the next read refetches regardless of age.
    pub async fn invalidate(&self) {
        let _guard = self.refresh.lock().await;
        self.store.remove(ROSTER_CACHE_KEY);
    }

    fn read_entry(&self) -> Option<CacheEntry> {
        let raw = self.store.get(ROSTER_CACHE_KEY)?;
        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Cached roster record unreadable, refetching: {}", e);
                None
            }
        }
    }

    async fn refetch(&self) -> Result<Vec<String>, LayoffWatchError> {
        let csv = self.client.fetch_roster_csv().await?;
        let items = roster::parse_roster(&csv);
        let entry = CacheEntry {
            fetched_at: self.clock.now_ms(),
            items,
        };
        self.store.set(ROSTER_CACHE_KEY, serde_json::to_string(&entry)?);
        tracing::debug!("Roster refreshed ({} companies)", entry.items.len());
        Ok(entry.items)
    }
}
