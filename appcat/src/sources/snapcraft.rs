//! Snapcraft store client
//!
//! Queries the snap store find API and returns the category names of the
//! snap whose name matches the requested application.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::{absorb_error, CategorySource};

const SNAPCRAFT_FIND_URL: &str = "https://api.snapcraft.io/v2/snaps/find";

/// Required by the v2 snap store API
const SNAP_DEVICE_SERIES: &str = "16";

/// Snapcraft client errors
#[derive(Debug, Error)]
pub enum SnapcraftError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Snap store find response
#[derive(Debug, Deserialize)]
struct FindResponse {
    #[serde(default)]
    results: Vec<FindResult>,
}

#[derive(Debug, Deserialize)]
struct FindResult {
    name: String,
    snap: SnapDetails,
}

#[derive(Debug, Deserialize)]
struct SnapDetails {
    #[serde(default)]
    categories: Vec<SnapCategory>,
}

#[derive(Debug, Deserialize)]
struct SnapCategory {
    name: String,
}

/// Snapcraft store API client
pub struct SnapcraftClient {
    http: reqwest::Client,
}

impl SnapcraftClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch category tags for an application by exact (case-insensitive)
    /// snap name match
    pub async fn fetch_categories(
        &self,
        app_name: &str,
    ) -> Result<Option<Vec<String>>, SnapcraftError> {
        let response = self
            .http
            .get(SNAPCRAFT_FIND_URL)
            .header("Snap-Device-Series", SNAP_DEVICE_SERIES)
            .query(&[("q", app_name), ("fields", "categories")])
            .send()
            .await
            .map_err(|e| SnapcraftError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SnapcraftError::Api(status.as_u16(), body));
        }

        let found: FindResponse = response
            .json()
            .await
            .map_err(|e| SnapcraftError::Parse(e.to_string()))?;

        let categories = found
            .results
            .into_iter()
            .find(|r| r.name.eq_ignore_ascii_case(app_name))
            .map(|r| r.snap.categories.into_iter().map(|c| c.name).collect());

        Ok(categories)
    }
}

#[async_trait]
impl CategorySource for SnapcraftClient {
    fn name(&self) -> &'static str {
        "Snapcraft"
    }

    async fn get_categories(&self, app_name: &str) -> Option<Vec<String>> {
        absorb_error(self.name(), self.fetch_categories(app_name).await)
    }
}
