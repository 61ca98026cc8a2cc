//! Query filters for catalogue listings.

/// Filter for collection listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionFilter {
    /// Restrict the listing to a single collection identifier.
    pub uid: Option<String>,
}

impl CollectionFilter {
    /// Filter matching exactly one collection identifier.
    pub fn by_uid(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
        }
    }

    /// Render the filter as OpenSearch query parameters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(uid) = &self.uid {
            pairs.push(("uid", uid.clone()));
        }
        pairs
    }
}

/// Filter for product listings and counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Restrict the listing to a single product identifier.
    pub uid: Option<String>,

    /// Start of the temporal filter (ISO 8601).
    pub start: Option<String>,

    /// End of the temporal filter (ISO 8601).
    pub end: Option<String>,

    /// Bounding box rendered as `west,south,east,north`.
    pub bbox: Option<String>,

    /// Intersection geometry in well-known text.
    pub geometry: Option<String>,
}

impl ProductFilter {
    /// Filter matching exactly one product identifier.
    pub fn by_uid(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
            ..Default::default()
        }
    }

    /// Render the filter as OpenSearch query parameters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(uid) = &self.uid {
            pairs.push(("uid", uid.clone()));
        }
        if let Some(start) = &self.start {
            pairs.push(("start", start.clone()));
        }
        if let Some(end) = &self.end {
            pairs.push(("end", end.clone()));
        }
        if let Some(bbox) = &self.bbox {
            pairs.push(("bbox", bbox.clone()));
        }
        if let Some(geometry) = &self.geometry {
            pairs.push(("geometry", geometry.clone()));
        }
        pairs
    }
}
