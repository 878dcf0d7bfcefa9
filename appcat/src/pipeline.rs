//! Categorization pipeline
//!
//! `Categorizer` owns the catalog clients and the resolver. For each
//! application it queries every source strictly sequentially, keeps the
//! non-empty results, resolves one canonical category, and derives the
//! energy label.

use appcat_common::{Error, Result, Settings};
use std::time::Duration;

use crate::category::{CategoryResolver, EnergyTier};
use crate::sources::{
    AppStoreClient, CategorySource, FlathubClient, GogClient, ItchIoClient, MyAbandonwareClient,
    SnapcraftClient,
};

pub use crate::category::resolver::RawCategories;

/// Category reported when no source has data for the application
pub const NO_SUCH_APP: &str = "No such app";

/// Energy label reported when no source has data for the application
pub const UNKNOWN_ENERGY: &str = "Unknown";

/// Final classification for one application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppReport {
    pub app_name: String,
    pub category: String,
    pub energy_label: String,
}

/// Application categorizer: catalog clients plus category resolver
pub struct Categorizer {
    sources: Vec<Box<dyn CategorySource>>,
    resolver: CategoryResolver,
}

impl Categorizer {
    /// Build the full categorizer: six catalog clients sharing one HTTP
    /// client, and the resolver with the default embedding backend
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.http_timeout_secs))
            .build()
            .map_err(|e| Error::Internal(format!("HTTP client init failed: {}", e)))?;

        let sources: Vec<Box<dyn CategorySource>> = vec![
            Box::new(SnapcraftClient::new(http.clone())),
            Box::new(FlathubClient::new(http.clone())),
            Box::new(AppStoreClient::new(http.clone())),
            Box::new(GogClient::new(http.clone())),
            Box::new(ItchIoClient::new(http.clone())),
            Box::new(MyAbandonwareClient::new(http)),
        ];

        let resolver = CategoryResolver::with_default_embedder(settings.confidence_threshold);

        Ok(Self { sources, resolver })
    }

    /// Build a categorizer from explicit parts (test injection)
    pub fn with_parts(sources: Vec<Box<dyn CategorySource>>, resolver: CategoryResolver) -> Self {
        Self { sources, resolver }
    }

    /// Query every source sequentially, keeping non-empty results
    pub async fn fetch_app_data(&self, app_name: &str) -> RawCategories {
        let mut raw = RawCategories::new();
        for source in &self.sources {
            match source.get_categories(app_name).await {
                Some(tags) if !tags.is_empty() => {
                    tracing::debug!(source = source.name(), tags = ?tags, "Source returned tags");
                    raw.insert(source.name().to_string(), tags);
                }
                _ => {
                    tracing::debug!(source = source.name(), "No data from source");
                }
            }
        }
        raw
    }

    /// Determine category and energy label for a single application
    pub async fn process_app(&self, app_name: &str) -> AppReport {
        let raw_categories = self.fetch_app_data(app_name).await;

        if raw_categories.is_empty() {
            tracing::info!(app = %app_name, "No source returned data");
            return AppReport {
                app_name: app_name.to_string(),
                category: NO_SUCH_APP.to_string(),
                energy_label: UNKNOWN_ENERGY.to_string(),
            };
        }

        tracing::info!(app = %app_name, sources = raw_categories.len(), "Resolving category");

        let category = self
            .resolver
            .select_main_category(app_name, &raw_categories);
        let energy = EnergyTier::for_category(category);

        AppReport {
            app_name: app_name.to_string(),
            category: category.label().to_string(),
            energy_label: energy.as_str().to_string(),
        }
    }
}
