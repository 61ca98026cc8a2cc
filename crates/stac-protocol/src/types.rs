//! Core STAC types used across the API.

use serde::{Deserialize, Serialize};

/// A hyperlink to a related resource.
///
/// Links are used throughout the STAC API to enable navigation and
/// discovery. Pagination links additionally carry the HTTP method and, for
/// body-based requests, the payload the client must re-submit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    /// The URI of the linked resource.
    pub href: String,

    /// The relationship type (e.g., "self", "next", "items").
    pub rel: String,

    /// The media type of the linked resource.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// A human-readable title for the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// HTTP method to use when following the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Request body to submit when following the link (POST pagination).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl Link {
    /// Create a new link with required fields.
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            type_: None,
            title: None,
            method: None,
            body: None,
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

    /// Set the HTTP method.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// The spatial and temporal extent of a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Extent {
    /// The spatial extent of the collection.
    pub spatial: SpatialExtent,

    /// The temporal extent of the collection.
    pub temporal: TemporalExtent,
}

impl Extent {
    /// Create an extent from a bounding box and a temporal interval.
    ///
    /// An absent interval end means the collection is still growing.
    pub fn new(bbox: Vec<f64>, start: impl Into<String>, end: Option<String>) -> Self {
        Self {
            spatial: SpatialExtent { bbox: vec![bbox] },
            temporal: TemporalExtent {
                interval: vec![vec![Some(start.into()), end]],
            },
        }
    }
}

/// Spatial extent with bounding boxes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpatialExtent {
    /// Bounding boxes as [west, south, east, north] arrays.
    pub bbox: Vec<Vec<f64>>,
}

/// Temporal extent with time intervals.
///
/// Interval entries are [start, end] pairs; a null end marks an open-ended
/// interval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemporalExtent {
    /// Time intervals as [start, end] pairs (ISO 8601).
    pub interval: Vec<Vec<Option<String>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let link = Link::new("http://example.com", "self");
        assert_eq!(link.href, "http://example.com");
        assert_eq!(link.rel, "self");
        assert!(link.type_.is_none());
        assert!(link.method.is_none());
    }

    #[test]
    fn test_link_builder() {
        let link = Link::new("http://example.com/search", "next")
            .with_type("application/geo+json")
            .with_title("Next page")
            .with_method("POST")
            .with_body(serde_json::json!({"token": "c,11,15"}));

        assert_eq!(link.rel, "next");
        assert_eq!(link.method, Some("POST".to_string()));
        assert!(link.body.is_some());
    }

    #[test]
    fn test_link_serialization_skips_absent_fields() {
        let link = Link::new("http://example.com", "self").with_type("application/json");

        let json = serde_json::to_string(&link).unwrap();
        assert!(json.contains("\"href\":\"http://example.com\""));
        assert!(json.contains("\"type\":\"application/json\""));
        assert!(!json.contains("\"method\""));
        assert!(!json.contains("\"body\""));
        assert!(!json.contains("\"title\""));
    }

    #[test]
    fn test_extent_open_interval() {
        let extent = Extent::new(
            vec![-180.0, -56.0, 180.0, 83.0],
            "2019-01-01T00:00:00Z",
            None,
        );

        assert_eq!(extent.spatial.bbox.len(), 1);
        assert_eq!(extent.temporal.interval[0][1], None);

        let json = serde_json::to_string(&extent).unwrap();
        // Open end serializes as an explicit null, not an omitted field
        assert!(json.contains("null"));
    }

    #[test]
    fn test_extent_closed_interval() {
        let extent = Extent::new(
            vec![0.0, 40.0, 10.0, 50.0],
            "2019-01-01T00:00:00Z",
            Some("2020-01-01T00:00:00Z".to_string()),
        );

        assert_eq!(
            extent.temporal.interval[0],
            vec![
                Some("2019-01-01T00:00:00Z".to_string()),
                Some("2020-01-01T00:00:00Z".to_string())
            ]
        );
    }
}
