//! Error types for the engine layer.

use std::fmt;

/// Errors produced by the engine layer, wrapping roster-fetch failures
/// and adding record serialization failures.
///
/// Malformed roster rows, malformed cached records, and out-of-range TTL
/// values are deliberately not represented here: rows are skipped, bad cache
/// records count as misses, and TTLs are clamped.
#[derive(Debug)]
pub enum LayoffWatchError {
    /// The roster source could not be fetched.
    Api(layoffwatch_api::Error),
    /// JSON serialization or deserialization of a stored record failed.
    Serialization(serde_json::Error),
}

impl fmt::Display for LayoffWatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for LayoffWatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
        }
    }
}

impl From<layoffwatch_api::Error> for LayoffWatchError {
    fn from(e: layoffwatch_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for LayoffWatchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
