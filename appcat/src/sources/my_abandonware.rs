//! My Abandonware client
//!
//! Search-page presence probe, like the itch.io adapter: the site has no
//! JSON API, and its catalog is entirely games, so a hit yields the single
//! tag "Game".

use async_trait::async_trait;
use thiserror::Error;

use super::itch_io::page_mentions_title;
use super::{absorb_error, CategorySource};

const MYABANDONWARE_SEARCH_BASE: &str = "https://www.myabandonware.com/search/q";

/// My Abandonware client errors
#[derive(Debug, Error)]
pub enum MyAbandonwareError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// My Abandonware search-page presence probe
pub struct MyAbandonwareClient {
    http: reqwest::Client,
}

impl MyAbandonwareClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Probe the search page for the application title
    pub async fn fetch_categories(
        &self,
        app_name: &str,
    ) -> Result<Option<Vec<String>>, MyAbandonwareError> {
        let mut url = reqwest::Url::parse(MYABANDONWARE_SEARCH_BASE)
            .map_err(|e| MyAbandonwareError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| MyAbandonwareError::InvalidUrl(MYABANDONWARE_SEARCH_BASE.to_string()))?
            .push(app_name);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| MyAbandonwareError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MyAbandonwareError::Api(status.as_u16(), body));
        }

        let page = response
            .text()
            .await
            .map_err(|e| MyAbandonwareError::Network(e.to_string()))?;

        if page_mentions_title(&page, app_name) {
            Ok(Some(vec!["Game".to_string()]))
        } else {
            Ok(None)
        }
    }
}

#[async_trait]
impl CategorySource for MyAbandonwareClient {
    fn name(&self) -> &'static str {
        "My Abandonware"
    }

    async fn get_categories(&self, app_name: &str) -> Option<Vec<String>> {
        absorb_error(self.name(), self.fetch_categories(app_name).await)
    }
}
