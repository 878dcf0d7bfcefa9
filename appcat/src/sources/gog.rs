//! GOG.com client
//!
//! Queries the GOG storefront search endpoint. GOG carries games only, so
//! the resolver forces the Game category for this source; the returned tags
//! are informational.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::{absorb_error, CategorySource};

const GOG_SEARCH_URL: &str = "https://embed.gog.com/games/ajax/filtered";

/// GOG client errors
#[derive(Debug, Error)]
pub enum GogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// GOG filtered-search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct Product {
    title: String,
    #[serde(default)]
    genres: Vec<String>,
}

/// GOG storefront search client
pub struct GogClient {
    http: reqwest::Client,
}

impl GogClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch tags for a game by exact (case-insensitive) title match
    pub async fn fetch_categories(
        &self,
        app_name: &str,
    ) -> Result<Option<Vec<String>>, GogError> {
        let response = self
            .http
            .get(GOG_SEARCH_URL)
            .query(&[("mediaType", "game"), ("search", app_name)])
            .send()
            .await
            .map_err(|e| GogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GogError::Api(status.as_u16(), body));
        }

        let found: SearchResponse = response
            .json()
            .await
            .map_err(|e| GogError::Parse(e.to_string()))?;

        let Some(product) = found
            .products
            .into_iter()
            .find(|p| p.title.eq_ignore_ascii_case(app_name))
        else {
            return Ok(None);
        };

        // Everything on GOG is a game; genres may still be empty
        if product.genres.is_empty() {
            Ok(Some(vec!["Game".to_string()]))
        } else {
            Ok(Some(product.genres))
        }
    }
}

#[async_trait]
impl CategorySource for GogClient {
    fn name(&self) -> &'static str {
        "Gog"
    }

    async fn get_categories(&self, app_name: &str) -> Option<Vec<String>> {
        absorb_error(self.name(), self.fetch_categories(app_name).await)
    }
}
