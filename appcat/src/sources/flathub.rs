//! Flathub client
//!
//! Two-step lookup against the Flathub compat API: search by name, then
//! fetch the matching app's detail record for its category list.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::{absorb_error, CategorySource};

const FLATHUB_API_BASE: &str = "https://flathub.org/api/v2/compat/apps";

/// Flathub client errors
#[derive(Debug, Error)]
pub enum FlathubError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// One entry of the compat search response
#[derive(Debug, Deserialize)]
struct SearchEntry {
    name: String,
    #[serde(rename = "flatpakAppId")]
    flatpak_app_id: String,
}

/// App detail record (categories only)
#[derive(Debug, Deserialize)]
struct AppDetail {
    #[serde(default)]
    categories: Vec<AppCategory>,
}

#[derive(Debug, Deserialize)]
struct AppCategory {
    name: String,
}

/// Flathub compat API client
pub struct FlathubClient {
    http: reqwest::Client,
}

impl FlathubClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, FlathubError> {
        let mut url = reqwest::Url::parse(FLATHUB_API_BASE)
            .map_err(|e| FlathubError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| FlathubError::InvalidUrl(FLATHUB_API_BASE.to_string()))?
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: reqwest::Url,
    ) -> Result<T, FlathubError> {
        let response = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| FlathubError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FlathubError::Api(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| FlathubError::Parse(e.to_string()))
    }

    /// Fetch category tags for an application by exact (case-insensitive)
    /// name match among the search results
    pub async fn fetch_categories(
        &self,
        app_name: &str,
    ) -> Result<Option<Vec<String>>, FlathubError> {
        let search_url = self.endpoint(&["search", app_name])?;
        let entries: Vec<SearchEntry> = self.get_json(search_url).await?;

        let Some(entry) = entries
            .into_iter()
            .find(|e| e.name.eq_ignore_ascii_case(app_name))
        else {
            return Ok(None);
        };

        let detail_url = self.endpoint(&[&entry.flatpak_app_id])?;
        let detail: AppDetail = self.get_json(detail_url).await?;

        Ok(Some(
            detail.categories.into_iter().map(|c| c.name).collect(),
        ))
    }
}

#[async_trait]
impl CategorySource for FlathubClient {
    fn name(&self) -> &'static str {
        "Flathub"
    }

    async fn get_categories(&self, app_name: &str) -> Option<Vec<String>> {
        absorb_error(self.name(), self.fetch_categories(app_name).await)
    }
}
