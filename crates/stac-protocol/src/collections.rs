//! STAC Collection types.
//!
//! Collections group products that share provenance, typically one sensor or
//! processing line of the upstream catalogue.

use serde::{Deserialize, Serialize};

use crate::types::{Extent, Link};
use crate::{media_types, STAC_VERSION};

/// The response of the collection listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionList {
    /// The collections.
    pub collections: Vec<Collection>,

    /// Links to related resources.
    pub links: Vec<Link>,
}

impl CollectionList {
    /// Create a new collection list with the fixed self/root/parent link set.
    pub fn new(collections: Vec<Collection>, base_url: &str) -> Self {
        Self {
            collections,
            links: vec![
                Link::new(base_url, "root").with_type(media_types::JSON),
                Link::new(base_url, "parent").with_type(media_types::JSON),
                Link::new(format!("{}/collections", base_url), "self")
                    .with_type(media_types::JSON),
            ],
        }
    }
}

/// A STAC collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Type discriminator (always "Collection").
    #[serde(rename = "type")]
    pub type_: String,

    /// STAC specification version.
    pub stac_version: String,

    /// Unique identifier for the collection.
    pub id: String,

    /// Human-readable title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Detailed description.
    pub description: String,

    /// License of the collection's data.
    pub license: String,

    /// Keywords for discovery.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub keywords: Vec<String>,

    /// Spatial and temporal extent.
    pub extent: Extent,

    /// Summary statistics over the collection's products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summaries: Option<Summaries>,

    /// Links to related resources.
    pub links: Vec<Link>,
}

impl Collection {
    /// Create a new collection with required fields.
    pub fn new(id: impl Into<String>, extent: Extent) -> Self {
        Self {
            type_: "Collection".to_string(),
            stac_version: STAC_VERSION.to_string(),
            id: id.into(),
            title: None,
            description: String::new(),
            license: String::new(),
            keywords: Vec::new(),
            extent,
            summaries: None,
            links: Vec::new(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the license.
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    /// Set the keywords.
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set the summaries.
    pub fn with_summaries(mut self, summaries: Summaries) -> Self {
        self.summaries = Some(summaries);
        self
    }

    /// Build the standard link set for a collection.
    pub fn build_links(&mut self, base_url: &str) {
        self.links = collection_links(base_url, &self.id);
    }
}

/// The standard link set pointing at a collection resource.
///
/// Shared between the collection representation itself and item listings
/// scoped to a collection.
pub fn collection_links(base_url: &str, collection_id: &str) -> Vec<Link> {
    let collection_url = format!("{}/collections/{}", base_url, collection_id);
    vec![
        Link::new(&collection_url, "self").with_type(media_types::JSON),
        Link::new(base_url, "parent").with_type(media_types::JSON),
        Link::new(base_url, "root").with_type(media_types::JSON),
        Link::new(format!("{}/items", collection_url), "items")
            .with_type(media_types::GEO_JSON),
    ]
}

/// Summary statistics derived from a collection's acquisition metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summaries {
    /// Temporal coverage of the collection.
    pub datetime: DatetimeSummary,

    /// Distinct platform short names across the acquisition records.
    pub constellation: Vec<String>,

    /// Distinct instrument short names across the acquisition records.
    pub instruments: Vec<String>,
}

/// Min/max temporal coverage; max is null for still-growing collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatetimeSummary {
    pub min: String,
    pub max: Option<String>,
}
