//! Application state for the STAC API.

use std::sync::Arc;

use anyhow::Result;
use catalogue_client::{CatalogueClient, OpenSearchCatalogue};

/// Shared application state.
///
/// Built once at startup and read-only afterwards; every request borrows it
/// through an `Arc`.
pub struct AppState {
    /// The upstream catalogue, injected so tests can substitute a double.
    pub catalogue: Arc<dyn CatalogueClient>,

    /// Base URL for building links.
    pub base_url: String,
}

impl AppState {
    /// Create a new AppState from environment configuration.
    pub fn new() -> Result<Self> {
        let endpoint = std::env::var("CATALOGUE_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:8080/catalogue".to_string());

        let base_url = std::env::var("STAC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8084".to_string());

        let catalogue = Arc::new(OpenSearchCatalogue::new(&endpoint)?);

        Ok(Self::with_catalogue(catalogue, base_url))
    }

    /// Create an AppState around an existing catalogue client.
    pub fn with_catalogue(
        catalogue: Arc<dyn CatalogueClient>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            catalogue,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::StaticCatalogue;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let state = AppState::with_catalogue(
            Arc::new(StaticCatalogue::new()),
            "http://localhost:8084/",
        );
        assert_eq!(state.base_url, "http://localhost:8084");
    }
}
