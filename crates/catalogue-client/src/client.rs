//! The catalogue client trait and its HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::errors::CatalogueError;
use crate::filter::{CollectionFilter, ProductFilter};
use crate::records::{CatalogueCollection, CatalogueProduct};

/// A paged listing service over catalogue collections and products.
///
/// Consumers hold this as a trait object so tests can substitute an
/// in-memory double for the HTTP catalogue.
#[async_trait]
pub trait CatalogueClient: Send + Sync {
    /// List collections matching the filter.
    async fn list_collections(
        &self,
        filter: &CollectionFilter,
    ) -> Result<Vec<CatalogueCollection>, CatalogueError>;

    /// List products of a collection matching the filter.
    ///
    /// `start_index` is 1-based, following the upstream paging convention.
    async fn list_products(
        &self,
        collection: &str,
        filter: &ProductFilter,
        limit: Option<usize>,
        start_index: Option<usize>,
    ) -> Result<Vec<CatalogueProduct>, CatalogueError>;

    /// Count products of a collection matching the filter.
    async fn count_products(
        &self,
        collection: &str,
        filter: &ProductFilter,
    ) -> Result<usize, CatalogueError>;
}

/// Paged feature envelope returned by the catalogue endpoints.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct FeatureEnvelope<T> {
    #[serde(default)]
    properties: EnvelopeProperties,

    #[serde(default)]
    features: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
struct EnvelopeProperties {
    #[serde(rename = "totalResults", default)]
    total_results: Option<usize>,
}

/// HTTP implementation of [`CatalogueClient`] against an OpenSearch
/// catalogue endpoint.
pub struct OpenSearchCatalogue {
    client: reqwest::Client,
    endpoint: String,
}

impl OpenSearchCatalogue {
    /// Create a client for the catalogue at `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, CatalogueError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("eo-stac-bridge/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<FeatureEnvelope<T>, CatalogueError> {
        let url = format!("{}/{}", self.endpoint, path);
        debug!(url = %url, params = query.len(), "querying catalogue");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogueError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CatalogueError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CatalogueClient for OpenSearchCatalogue {
    async fn list_collections(
        &self,
        filter: &CollectionFilter,
    ) -> Result<Vec<CatalogueCollection>, CatalogueError> {
        let envelope: FeatureEnvelope<CatalogueCollection> =
            self.fetch_envelope("collections", &filter.query_pairs()).await?;
        Ok(envelope.features)
    }

    async fn list_products(
        &self,
        collection: &str,
        filter: &ProductFilter,
        limit: Option<usize>,
        start_index: Option<usize>,
    ) -> Result<Vec<CatalogueProduct>, CatalogueError> {
        let mut query = vec![("collection", collection.to_string())];
        query.extend(filter.query_pairs());
        if let Some(limit) = limit {
            query.push(("count", limit.to_string()));
        }
        if let Some(start_index) = start_index {
            query.push(("startIndex", start_index.to_string()));
        }

        let envelope: FeatureEnvelope<CatalogueProduct> =
            self.fetch_envelope("products", &query).await?;
        Ok(envelope.features)
    }

    async fn count_products(
        &self,
        collection: &str,
        filter: &ProductFilter,
    ) -> Result<usize, CatalogueError> {
        // count=0 asks for the hit count without any feature payload
        let mut query = vec![("collection", collection.to_string()), ("count", "0".to_string())];
        query.extend(filter.query_pairs());

        let envelope: FeatureEnvelope<CatalogueProduct> =
            self.fetch_envelope("products", &query).await?;
        envelope.properties.total_results.ok_or_else(|| {
            CatalogueError::Decode("catalogue response carries no totalResults".to_string())
        })
    }
}
