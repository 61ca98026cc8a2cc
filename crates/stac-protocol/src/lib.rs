//! STAC API protocol types and utilities.
//!
//! This crate provides the types needed to expose a SpatioTemporal Asset
//! Catalog (STAC) API: collections, items, assets, links, the search request
//! model, and the cursor-based pagination protocol used to page through
//! multiple underlying catalogue collections behind a single opaque token.
//!
//! # Example
//!
//! ```rust
//! use stac_protocol::{Collection, Extent, PageCursor};
//!
//! let extent = Extent::new(vec![-180.0, -56.0, 180.0, 83.0], "2019-01-01T00:00:00Z", None);
//! let mut collection = Collection::new("urn:eop:DEMO:S2_TOC_V2", extent);
//! collection.build_links("http://localhost:8084");
//!
//! let cursor = PageCursor::new("urn:eop:DEMO:S2_TOC_V2", 11, 15);
//! assert_eq!(PageCursor::decode(&cursor.encode()).unwrap(), cursor);
//! ```

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod items;
pub mod pagination;
pub mod responses;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use collections::{Collection, CollectionList, DatetimeSummary, Summaries};
pub use errors::StacError;
pub use geometry::Geometry;
pub use items::{Asset, AssetMap, Item, ItemCollection, ItemProperties};
pub use pagination::{CursorError, PageCursor, PagingLinks};
pub use responses::{ConformanceClasses, ExceptionResponse, LandingPage};
pub use search::SearchRequest;
pub use types::{Extent, Link, SpatialExtent, TemporalExtent};

/// STAC specification version implemented by these types.
pub const STAC_VERSION: &str = "1.0.0";

/// STAC API conformance class URIs
pub mod conformance {
    /// STAC API core conformance class
    pub const CORE: &str = "https://api.stacspec.org/v1.0.0/core";
    /// Item search conformance class
    pub const ITEM_SEARCH: &str = "https://api.stacspec.org/v1.0.0/item-search";
    /// OGC API Features conformance class
    pub const OGC_FEATURES: &str = "https://api.stacspec.org/v1.0.0/ogcapi-features";
    /// OGC API Features core conformance class
    pub const OGC_FEATURES_CORE: &str =
        "http://www.opengis.net/spec/ogcapi-features-1/1.0/conf/core";
    /// OGC API Features GeoJSON conformance class
    pub const OGC_FEATURES_GEOJSON: &str =
        "http://www.opengis.net/spec/ogcapi-features-1/1.0/conf/geojson";
}

/// Media types used in STAC responses
pub mod media_types {
    /// JSON media type
    pub const JSON: &str = "application/json";
    /// GeoJSON media type
    pub const GEO_JSON: &str = "application/geo+json";
}
