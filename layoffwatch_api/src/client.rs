//! HTTP client for the Layoffs.fyi tracker roster export.

use std::time::Duration;

use url::Url;

use crate::Error;

/// Sheet ID of the published tracker roster.
const ROSTER_SHEET_ID: &str = "1vAjibxwMZ2n0AE91NageAMCwwDAfUICjTj8BiaPa8NE";

/// HTTP client for the public roster CSV export.
///
/// The roster is a published Google Sheets document; a single unauthenticated
/// GET returns the whole list as CSV text. Each request builds a fresh
/// `reqwest::Client` with a 30-second timeout.
pub struct Client {
    /// Base URL for the export host. Defaults to `https://docs.google.com`.
    base_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production export host.
    pub fn new() -> Self {
        Self {
            base_url: "https://docs.google.com".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    fn export_url(&self) -> Result<Url, Error> {
        let raw = format!(
            "{}/spreadsheets/d/{}/export?format=csv",
            &self.base_url, ROSTER_SHEET_ID
        );
        Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    /// Fetches the roster as raw CSV text.
    ///
    /// Transport failures and non-2xx statuses are errors; the body is
    /// returned verbatim otherwise, with row handling left to the caller.
    pub async fn fetch_roster_csv(&self) -> Result<String, Error> {
        let url = self.export_url()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "text/csv, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch roster: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read roster body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Roster fetch failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
