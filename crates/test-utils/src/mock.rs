//! In-memory catalogue double.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use catalogue_client::{
    CatalogueClient, CatalogueCollection, CatalogueError, CatalogueProduct, CollectionFilter,
    ProductFilter,
};

/// An in-memory [`CatalogueClient`] serving fixed records.
///
/// Collections and products are returned in insertion order. Temporal,
/// bbox, and geometry filters are accepted but not evaluated; the `uid`
/// filters are, since the adaptation logic depends on them. Failures can be
/// scripted per collection to exercise upstream-error handling.
#[derive(Default)]
pub struct StaticCatalogue {
    collections: Vec<CatalogueCollection>,
    products: HashMap<String, Vec<CatalogueProduct>>,
    failing_products: HashSet<String>,
    fail_collection_listing: bool,
}

impl StaticCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection record.
    pub fn with_collection(mut self, collection: CatalogueCollection) -> Self {
        self.collections.push(collection);
        self
    }

    /// Add product records under a collection identifier.
    pub fn with_products(
        mut self,
        collection: impl Into<String>,
        products: Vec<CatalogueProduct>,
    ) -> Self {
        self.products
            .entry(collection.into())
            .or_default()
            .extend(products);
        self
    }

    /// Script product queries against the given collection to fail.
    pub fn with_failing_products(mut self, collection: impl Into<String>) -> Self {
        self.failing_products.insert(collection.into());
        self
    }

    /// Script collection listings to fail.
    pub fn with_failing_collection_listing(mut self) -> Self {
        self.fail_collection_listing = true;
        self
    }

    fn matching_products(
        &self,
        collection: &str,
        filter: &ProductFilter,
    ) -> Result<Vec<&CatalogueProduct>, CatalogueError> {
        if self.failing_products.contains(collection) {
            return Err(CatalogueError::Query(format!(
                "scripted failure for {}",
                collection
            )));
        }

        let products = self.products.get(collection).map(Vec::as_slice).unwrap_or(&[]);
        Ok(products
            .iter()
            .filter(|p| filter.uid.as_deref().map_or(true, |uid| p.id == uid))
            .collect())
    }
}

#[async_trait]
impl CatalogueClient for StaticCatalogue {
    async fn list_collections(
        &self,
        filter: &CollectionFilter,
    ) -> Result<Vec<CatalogueCollection>, CatalogueError> {
        if self.fail_collection_listing {
            return Err(CatalogueError::Query("scripted listing failure".to_string()));
        }

        Ok(self
            .collections
            .iter()
            .filter(|c| filter.uid.as_deref().map_or(true, |uid| c.id == uid))
            .cloned()
            .collect())
    }

    async fn list_products(
        &self,
        collection: &str,
        filter: &ProductFilter,
        limit: Option<usize>,
        start_index: Option<usize>,
    ) -> Result<Vec<CatalogueProduct>, CatalogueError> {
        let matching = self.matching_products(collection, filter)?;

        // startIndex is 1-based, like the upstream paging convention
        let skip = start_index.unwrap_or(1).saturating_sub(1);
        Ok(matching
            .into_iter()
            .skip(skip)
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn count_products(
        &self,
        collection: &str,
        filter: &ProductFilter,
    ) -> Result<usize, CatalogueError> {
        Ok(self.matching_products(collection, filter)?.len())
    }
}
