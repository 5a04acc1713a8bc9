//! User-tunable matching and cache settings.
//!
//! Settings live in the record store under a single key, serialized the way
//! the host's options page persists them (camelCase JSON). Missing or
//! unreadable records fall back to defaults; out-of-range TTLs are clamped
//! rather than rejected.

use serde::{Deserialize, Serialize};

use crate::error::LayoffWatchError;
use crate::store::RecordStore;

/// Record key for persisted settings.
pub const SETTINGS_KEY: &str = "userSettings";

const MIN_CACHE_TTL_MINUTES: u32 = 1;
const MAX_CACHE_TTL_MINUTES: u32 = 1440;

/// Snapshot of the user-facing knobs, immutable per match operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub fuzzy_matching: bool,
    pub remove_suffixes: bool,
    pub cache_ttl_minutes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fuzzy_matching: true,
            remove_suffixes: true,
            cache_ttl_minutes: 60,
        }
    }
}

impl Settings {
    fn clamped(mut self) -> Self {
        self.cache_ttl_minutes = self
            .cache_ttl_minutes
            .clamp(MIN_CACHE_TTL_MINUTES, MAX_CACHE_TTL_MINUTES);
        self
    }
}

/// Partial settings update; unset fields keep their current values.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub fuzzy_matching: Option<bool>,
    pub remove_suffixes: Option<bool>,
    pub cache_ttl_minutes: Option<u32>,
}

/// Loads settings from the store, applying defaults for missing fields and
/// clamping the TTL.
pub fn load_settings(store: &dyn RecordStore) -> Settings {
    let Some(raw) = store.get(SETTINGS_KEY) else {
        return Settings::default();
    };
    match serde_json::from_str::<Settings>(&raw) {
        Ok(settings) => settings.clamped(),
        Err(e) => {
            tracing::warn!("Stored settings unreadable, using defaults: {}", e);
            Settings::default()
        }
    }
}

/// Merges `patch` over the current settings, clamps, persists, and returns
/// the result.
pub fn save_settings(
    store: &dyn RecordStore,
    patch: &SettingsPatch,
) -> Result<Settings, LayoffWatchError> {
    let current = load_settings(store);
    let merged = Settings {
        fuzzy_matching: patch.fuzzy_matching.unwrap_or(current.fuzzy_matching),
        remove_suffixes: patch.remove_suffixes.unwrap_or(current.remove_suffixes),
        cache_ttl_minutes: patch.cache_ttl_minutes.unwrap_or(current.cache_ttl_minutes),
    }
    .clamped();
    store.set(SETTINGS_KEY, serde_json::to_string(&merged)?);
    Ok(merged)
}
