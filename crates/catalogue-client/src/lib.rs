//! Client for the upstream OpenSearch EO metadata catalogue.
//!
//! The catalogue is a paged listing service over collections and products.
//! This crate provides the typed upstream records, the query filters, and a
//! [`CatalogueClient`] trait so the consuming service can inject a test
//! double instead of the HTTP implementation.

pub mod client;
pub mod errors;
pub mod filter;
pub mod records;

// Re-export commonly used types
pub use client::{CatalogueClient, OpenSearchCatalogue};
pub use errors::CatalogueError;
pub use filter::{CollectionFilter, ProductFilter};
pub use records::{
    AcquisitionInformation, AcquisitionParameters, CatalogueCollection, CatalogueProduct,
    CollectionProperties, Instrument, Platform, ProductFile, ProductLinks, ProductProperties,
};
