//! STAC API metadata response types.
//!
//! This module contains the landing page, conformance declaration, and the
//! exception body returned on errors.

use serde::{Deserialize, Serialize};

use crate::types::Link;
use crate::{conformance, media_types};

/// Landing page response for the API root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LandingPage {
    /// Title of the API.
    pub title: String,

    /// Description of the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Links to related resources.
    pub links: Vec<Link>,
}

impl LandingPage {
    /// Create a new landing page with standard links.
    pub fn new(title: impl Into<String>, description: impl Into<String>, base_url: &str) -> Self {
        let links = vec![
            Link::new(base_url, "self")
                .with_type(media_types::JSON)
                .with_title("This document"),
            Link::new(base_url, "root").with_type(media_types::JSON),
            Link::new(format!("{}/conformance", base_url), "conformance")
                .with_type(media_types::JSON)
                .with_title("Conformance classes"),
            Link::new(format!("{}/collections", base_url), "data")
                .with_type(media_types::JSON)
                .with_title("Collections"),
            Link::new(format!("{}/search", base_url), "search")
                .with_type(media_types::GEO_JSON)
                .with_title("Item search")
                .with_method("GET"),
            Link::new(format!("{}/search", base_url), "search")
                .with_type(media_types::GEO_JSON)
                .with_title("Item search")
                .with_method("POST"),
        ];

        Self {
            title: title.into(),
            description: Some(description.into()),
            links,
        }
    }
}

/// Conformance declaration response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConformanceClasses {
    /// List of conformance class URIs.
    #[serde(rename = "conformsTo")]
    pub conforms_to: Vec<String>,
}

impl ConformanceClasses {
    /// Conformance classes for the current implementation.
    pub fn current() -> Self {
        Self {
            conforms_to: vec![
                conformance::CORE.to_string(),
                conformance::ITEM_SEARCH.to_string(),
                conformance::OGC_FEATURES.to_string(),
                conformance::OGC_FEATURES_CORE.to_string(),
                conformance::OGC_FEATURES_GEOJSON.to_string(),
            ],
        }
    }

    /// Check if a conformance class is declared.
    pub fn contains(&self, class: &str) -> bool {
        self.conforms_to.iter().any(|c| c == class)
    }
}

/// Exception body returned on errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExceptionResponse {
    /// Machine-readable error code.
    pub code: String,

    /// Human-readable error description.
    pub description: String,
}

impl ExceptionResponse {
    /// Create a new exception response.
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// Create a 404 Not Found exception.
    pub fn not_found(description: impl Into<String>) -> Self {
        Self::new("NotFoundError", description)
    }

    /// Create a 400 Bad Request exception.
    pub fn bad_request(description: impl Into<String>) -> Self {
        Self::new("InvalidQueryParameter", description)
    }

    /// Create a 500 Internal Server Error exception.
    pub fn internal_error(description: impl Into<String>) -> Self {
        Self::new("InternalServerError", description)
    }
}
