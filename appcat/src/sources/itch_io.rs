//! itch.io client
//!
//! itch.io exposes no public JSON search API, so this adapter probes the
//! search page for a title hit. A hit yields the single tag "Game" — the
//! whole catalog is games, and the resolver forces the Game category for
//! this source anyway.

use async_trait::async_trait;
use thiserror::Error;

use super::{absorb_error, CategorySource};
use crate::category::normalizer::normalize_tag;

const ITCH_SEARCH_URL: &str = "https://itch.io/search";

/// itch.io client errors
#[derive(Debug, Error)]
pub enum ItchIoError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),
}

/// itch.io search-page presence probe
pub struct ItchIoClient {
    http: reqwest::Client,
}

impl ItchIoClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Probe the search page for the application title
    pub async fn fetch_categories(
        &self,
        app_name: &str,
    ) -> Result<Option<Vec<String>>, ItchIoError> {
        let response = self
            .http
            .get(ITCH_SEARCH_URL)
            .query(&[("q", app_name)])
            .send()
            .await
            .map_err(|e| ItchIoError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ItchIoError::Api(status.as_u16(), body));
        }

        let page = response
            .text()
            .await
            .map_err(|e| ItchIoError::Network(e.to_string()))?;

        if page_mentions_title(&page, app_name) {
            Ok(Some(vec!["Game".to_string()]))
        } else {
            Ok(None)
        }
    }
}

/// Normalized substring check, tolerant of markup and case differences
pub(crate) fn page_mentions_title(page: &str, app_name: &str) -> bool {
    let needle = normalize_tag(app_name);
    if needle.is_empty() {
        return false;
    }
    normalize_tag(page).contains(&needle)
}

#[async_trait]
impl CategorySource for ItchIoClient {
    fn name(&self) -> &'static str {
        "Itch.io"
    }

    async fn get_categories(&self, app_name: &str) -> Option<Vec<String>> {
        absorb_error(self.name(), self.fetch_categories(app_name).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_probe_matches_through_markup_and_case() {
        let page = r#"<div class="game_cell"><a href="/x">Celeste Classic</a></div>"#;
        assert!(page_mentions_title(page, "celeste classic"));
        assert!(page_mentions_title(page, "Celeste Classic"));
        assert!(!page_mentions_title(page, "Hollow Knight"));
    }

    #[test]
    fn empty_title_never_matches() {
        assert!(!page_mentions_title("anything", ""));
        assert!(!page_mentions_title("anything", "!!!"));
    }
}
