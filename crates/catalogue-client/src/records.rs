//! Upstream catalogue record types.
//!
//! The catalogue serves GeoJSON-style feature records whose `properties`
//! carry the EO metadata. Nested acquisition sub-records are irregular:
//! any of their leaves may be missing on a given record, so every nested
//! field is optional here and the consumer decides which absences are
//! errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An upstream collection record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogueCollection {
    /// Unique identifier of the collection.
    pub id: String,

    /// Bounding box as [west, south, east, north].
    #[serde(default)]
    pub bbox: Vec<f64>,

    /// Collection metadata.
    pub properties: CollectionProperties,
}

/// Metadata of an upstream collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionProperties {
    /// Date range as `start/end`; the end component may be empty or absent.
    pub date: String,

    /// Human-readable title.
    pub title: String,

    /// Free-text description.
    #[serde(rename = "abstract")]
    pub abstract_: String,

    /// License string.
    pub rights: String,

    /// Keywords.
    #[serde(default)]
    pub keyword: Vec<String>,

    /// Acquisition metadata sub-records.
    #[serde(rename = "acquisitionInformation", default)]
    pub acquisition_information: Vec<AcquisitionInformation>,
}

/// One acquisition-information sub-record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AcquisitionInformation {
    /// Sensing platform, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// Sensing instrument, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<Instrument>,

    /// Sensing parameters, when recorded.
    #[serde(
        rename = "acquisitionParameters",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub acquisition_parameters: Option<AcquisitionParameters>,
}

/// Platform identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Platform {
    #[serde(
        rename = "platformShortName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub platform_short_name: Option<String>,
}

/// Instrument identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Instrument {
    #[serde(
        rename = "instrumentShortName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub instrument_short_name: Option<String>,
}

/// Sensing interval of a product or collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AcquisitionParameters {
    #[serde(
        rename = "beginningDateTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub beginning_date_time: Option<String>,

    #[serde(
        rename = "endingDateTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ending_date_time: Option<String>,
}

/// An upstream product record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogueProduct {
    /// Unique identifier of the product.
    pub id: String,

    /// Bounding box as [west, south, east, north].
    #[serde(default)]
    pub bbox: Vec<f64>,

    /// GeoJSON footprint geometry, kept as raw JSON and passed through.
    #[serde(default)]
    pub geometry: Value,

    /// Product metadata.
    pub properties: ProductProperties,
}

/// Metadata of an upstream product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductProperties {
    /// Nominal acquisition date.
    pub date: String,

    /// Human-readable title.
    pub title: String,

    /// Publication timestamp.
    pub published: String,

    /// Last-update timestamp.
    pub updated: String,

    /// Identifier of the owning collection.
    #[serde(rename = "parentIdentifier")]
    pub parent_identifier: String,

    /// Acquisition metadata sub-records.
    #[serde(rename = "acquisitionInformation", default)]
    pub acquisition_information: Vec<AcquisitionInformation>,

    /// File references grouped by category.
    #[serde(default)]
    pub links: ProductLinks,
}

/// Product file references, grouped by the upstream categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductLinks {
    /// Quicklook and thumbnail files.
    #[serde(default)]
    pub previews: Vec<ProductFile>,

    /// Alternate metadata representations.
    #[serde(default)]
    pub alternates: Vec<ProductFile>,

    /// Related files without a fixed role.
    #[serde(default)]
    pub related: Vec<ProductFile>,

    /// The product data files.
    #[serde(default)]
    pub data: Vec<ProductFile>,
}

/// One file reference of a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductFile {
    /// URL of the file.
    pub href: String,

    /// Media type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Upstream category tag (quicklook previews carry one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// File size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_deserialization() {
        let json = r#"{
            "type": "Feature",
            "id": "urn:eop:DEMO:S2_TOC_V2",
            "bbox": [-180.0, -56.0, 180.0, 83.0],
            "properties": {
                "date": "2019-01-01T00:00:00Z/",
                "title": "Sentinel-2 TOC",
                "abstract": "Top of canopy reflectances",
                "rights": "proprietary",
                "keyword": ["optical"],
                "acquisitionInformation": [
                    {"platform": {"platformShortName": "SENTINEL-2"}},
                    {"instrument": {"instrumentShortName": "MSI"}}
                ]
            }
        }"#;

        let collection: CatalogueCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.id, "urn:eop:DEMO:S2_TOC_V2");
        assert_eq!(collection.properties.date, "2019-01-01T00:00:00Z/");
        assert_eq!(collection.properties.acquisition_information.len(), 2);
        assert!(collection.properties.acquisition_information[0]
            .platform
            .is_some());
        assert!(collection.properties.acquisition_information[0]
            .instrument
            .is_none());
    }

    #[test]
    fn test_product_deserialization_with_sparse_links() {
        let json = r#"{
            "id": "urn:eop:DEMO:S2_TOC_V2:S2A_20220107",
            "bbox": [4.8, 51.1, 5.0, 51.3],
            "geometry": {"type": "Point", "coordinates": [4.9, 51.2]},
            "properties": {
                "date": "2022-01-07T10:44:31Z",
                "title": "S2A tile",
                "published": "2022-01-08T00:00:00Z",
                "updated": "2022-01-09T00:00:00Z",
                "parentIdentifier": "urn:eop:DEMO:S2_TOC_V2",
                "acquisitionInformation": [
                    {
                        "acquisitionParameters": {
                            "beginningDateTime": "2022-01-07T10:44:31Z",
                            "endingDateTime": "2022-01-07T10:44:31Z"
                        }
                    }
                ],
                "links": {
                    "data": [
                        {"href": "https://data.example.com/p/file.tif", "type": "image/tiff", "length": 123}
                    ]
                }
            }
        }"#;

        let product: CatalogueProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.properties.parent_identifier, "urn:eop:DEMO:S2_TOC_V2");
        assert!(product.properties.links.previews.is_empty());
        assert_eq!(product.properties.links.data.len(), 1);
        assert_eq!(product.properties.links.data[0].length, Some(123));
    }

    #[test]
    fn test_product_without_links_block() {
        let json = r#"{
            "id": "p1",
            "properties": {
                "date": "2022-01-07T10:44:31Z",
                "title": "p1",
                "published": "2022-01-08T00:00:00Z",
                "updated": "2022-01-09T00:00:00Z",
                "parentIdentifier": "c1"
            }
        }"#;

        let product: CatalogueProduct = serde_json::from_str(json).unwrap();
        assert!(product.bbox.is_empty());
        assert!(product.geometry.is_null());
        assert_eq!(product.properties.links, ProductLinks::default());
    }
}
