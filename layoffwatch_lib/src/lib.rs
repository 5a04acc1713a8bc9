//! Engine layer for LayoffWatch: roster caching, name normalization, and
//! company matching.
//!
//! Wraps the `layoffwatch_api` crate with a TTL-cached roster, user
//! settings, and the fuzzy company-match pipeline a host application embeds.
//! The host supplies a [`RecordStore`] for persistence and receives check
//! outcomes either as return values or through a [`CheckListener`].

pub mod cache;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod roster;
pub mod settings;
pub mod store;

pub use layoffwatch_api;

pub use cache::{CacheEntry, Clock, RosterCache, SystemClock, ROSTER_CACHE_KEY};
pub use engine::{CheckListener, MatchEngine};
pub use error::LayoffWatchError;
pub use settings::{Settings, SettingsPatch, SETTINGS_KEY};
pub use store::{MemoryStore, RecordStore};
