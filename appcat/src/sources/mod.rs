//! Catalog source adapters
//!
//! One client per third-party catalog. Every adapter implements
//! `CategorySource`: network and parse failures are logged at this boundary
//! and surface as an absent result, never as an error to the resolver.

pub mod app_store;
pub mod flathub;
pub mod gog;
pub mod itch_io;
pub mod my_abandonware;
pub mod snapcraft;

pub use app_store::{AppStoreClient, AppStoreError};
pub use flathub::{FlathubClient, FlathubError};
pub use gog::{GogClient, GogError};
pub use itch_io::{ItchIoClient, ItchIoError};
pub use my_abandonware::{MyAbandonwareClient, MyAbandonwareError};
pub use snapcraft::{SnapcraftClient, SnapcraftError};

use async_trait::async_trait;

/// A catalog that can report category tags for an application name.
///
/// `get_categories` is total: adapters translate their own failures to
/// `None` ("no data from this source") so one broken catalog never aborts
/// the overall resolution.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Source display name, used as the key in `RawCategories`
    fn name(&self) -> &'static str;

    /// Raw category tags for the application, or `None` when the source has
    /// no data (including on network or parse failure)
    async fn get_categories(&self, app_name: &str) -> Option<Vec<String>>;
}

/// Convert an adapter-level fetch result to the absent-on-failure contract,
/// logging the failure
pub(crate) fn absorb_error<E: std::fmt::Display>(
    source: &str,
    result: Result<Option<Vec<String>>, E>,
) -> Option<Vec<String>> {
    match result {
        Ok(tags) => tags.filter(|t| !t.is_empty()),
        Err(e) => {
            tracing::warn!(source = %source, error = %e, "Catalog lookup failed, treating as no data");
            None
        }
    }
}
