//! STAC Item and Asset types.
//!
//! Items are the standardized representation of one upstream product. Assets
//! are typed references to the product's files; their map keeps insertion
//! order, because clients render assets in the order the server lists them.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::media_types;
use crate::types::Link;

/// A STAC item (one product of a collection).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Type discriminator (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// STAC specification version.
    pub stac_version: String,

    /// Unique identifier for the item.
    pub id: String,

    /// GeoJSON geometry of the product footprint, passed through from the
    /// upstream record.
    pub geometry: serde_json::Value,

    /// Bounding box as [west, south, east, north].
    pub bbox: Vec<f64>,

    /// Item properties.
    pub properties: ItemProperties,

    /// Identifier of the owning collection.
    pub collection: String,

    /// Links to related resources.
    pub links: Vec<Link>,

    /// Assets keyed by their derived name, in insertion order.
    pub assets: AssetMap,
}

impl Item {
    /// Build the standard link set for an item.
    pub fn build_links(&mut self, base_url: &str, collection_id: &str) {
        let collection_url = format!("{}/collections/{}", base_url, collection_id);
        self.links = vec![
            Link::new(format!("{}/items/{}", collection_url, self.id), "self")
                .with_type(media_types::GEO_JSON),
            Link::new(&collection_url, "parent").with_type(media_types::JSON),
            Link::new(&collection_url, "collection").with_type(media_types::JSON),
            Link::new(base_url, "root").with_type(media_types::JSON),
        ];
    }
}

/// The fixed property set of an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemProperties {
    /// Nominal acquisition date of the product.
    pub datetime: String,

    /// Human-readable title.
    pub title: String,

    /// Publication timestamp in the upstream catalogue.
    pub created: String,

    /// Last-update timestamp in the upstream catalogue.
    pub updated: String,

    /// Start of the sensing interval.
    pub start_datetime: String,

    /// End of the sensing interval.
    pub end_datetime: String,

    /// Platform short name, when the upstream record carries one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub platform: Option<String>,
}

/// A typed reference to a file associated with an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    /// URL of the referenced file.
    pub href: String,

    /// Media type of the referenced file.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub type_: Option<String>,

    /// Human-readable title.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,

    /// Role tags (e.g., "thumbnail", "metadata", "data").
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub roles: Option<Vec<String>>,
}

impl Asset {
    /// Create a new asset.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            type_: None,
            title: None,
            roles: None,
        }
    }

    /// Set the media type.
    pub fn with_type(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the roles.
    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = Some(roles);
        self
    }
}

/// An insertion-ordered map of asset key to asset.
///
/// Inserting an existing key replaces the value but keeps the key's original
/// position, so later file categories overwrite earlier ones on key
/// collisions without reshuffling the listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetMap {
    entries: Vec<(String, Asset)>,
}

impl AssetMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an asset, replacing any existing value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, asset: Asset) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = asset,
            None => self.entries.push((key, asset)),
        }
    }

    /// Look up an asset by key.
    pub fn get(&self, key: &str) -> Option<&Asset> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, a)| a)
    }

    /// Whether the map contains the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of assets in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (key, asset) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Asset)> {
        self.entries.iter().map(|(k, a)| (k.as_str(), a))
    }
}

impl Serialize for AssetMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, asset) in &self.entries {
            map.serialize_entry(key, asset)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AssetMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AssetMapVisitor;

        impl<'de> Visitor<'de> for AssetMapVisitor {
            type Value = AssetMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of asset key to asset")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut assets = AssetMap::new();
                while let Some((key, asset)) = access.next_entry::<String, Asset>()? {
                    assets.insert(key, asset);
                }
                Ok(assets)
            }
        }

        deserializer.deserialize_map(AssetMapVisitor)
    }
}

/// The response of a search or item-listing request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemCollection {
    /// Type discriminator (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// The matched items for this page.
    pub features: Vec<Item>,

    /// Pagination and navigation links.
    pub links: Vec<Link>,
}

impl ItemCollection {
    /// Create a new item collection.
    pub fn new(features: Vec<Item>, links: Vec<Link>) -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features,
            links,
        }
    }
}
