//! Apple App Store client
//!
//! Uses the public iTunes Search API (`entity=software`) and returns the
//! genre list of the matching application.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::{absorb_error, CategorySource};

const ITUNES_SEARCH_URL: &str = "https://itunes.apple.com/search";
const SEARCH_LIMIT: u32 = 25;

/// App Store client errors
#[derive(Debug, Error)]
pub enum AppStoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// iTunes search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SoftwareResult>,
}

#[derive(Debug, Deserialize)]
struct SoftwareResult {
    #[serde(rename = "trackName")]
    track_name: String,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(rename = "primaryGenreName")]
    primary_genre_name: Option<String>,
}

/// Apple App Store (iTunes Search API) client
pub struct AppStoreClient {
    http: reqwest::Client,
}

impl AppStoreClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch genre tags for an application by exact (case-insensitive)
    /// track name match
    pub async fn fetch_categories(
        &self,
        app_name: &str,
    ) -> Result<Option<Vec<String>>, AppStoreError> {
        let response = self
            .http
            .get(ITUNES_SEARCH_URL)
            .query(&[
                ("term", app_name),
                ("entity", "software"),
                ("limit", &SEARCH_LIMIT.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppStoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppStoreError::Api(status.as_u16(), body));
        }

        let found: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppStoreError::Parse(e.to_string()))?;

        let Some(result) = found
            .results
            .into_iter()
            .find(|r| r.track_name.eq_ignore_ascii_case(app_name))
        else {
            return Ok(None);
        };

        // Genre list preferred; primary genre as a single-tag fallback
        if !result.genres.is_empty() {
            Ok(Some(result.genres))
        } else {
            Ok(result.primary_genre_name.map(|g| vec![g]))
        }
    }
}

#[async_trait]
impl CategorySource for AppStoreClient {
    fn name(&self) -> &'static str {
        "Apple Store"
    }

    async fn get_categories(&self, app_name: &str) -> Option<Vec<String>> {
        absorb_error(self.name(), self.fetch_categories(app_name).await)
    }
}
