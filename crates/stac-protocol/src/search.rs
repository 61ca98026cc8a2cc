//! Search request model and parameter validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::StacError;
use crate::geometry::Geometry;

/// Default page size when the request does not specify one.
pub const DEFAULT_LIMIT: usize = 10;

/// Largest accepted page size.
pub const MAX_LIMIT: usize = 10_000;

/// A cross-collection search request.
///
/// Carries the same logical fields for the query-parameter (GET) and body
/// (POST) request styles. `query`, `fields` and `sortby` are accepted and
/// validated but not forwarded to the upstream catalogue, which has no
/// equivalent capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Target collection identifiers, queried in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<String>,

    /// Explicit item identifiers to look up instead of filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,

    /// Bounding box filter as [west, south, east, north] (optionally with
    /// two vertical bounds for arity 6).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,

    /// Datetime instant or interval filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,

    /// Geometry-intersection filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intersects: Option<Geometry>,

    /// Maximum number of results per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Opaque property query (validated, not applied).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,

    /// Pagination token from a previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Field selection (accepted, not applied).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Sort specification (accepted, not applied).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortby: Option<Value>,
}

impl SearchRequest {
    /// Effective page size.
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Validate the request parameters.
    pub fn validate(&self) -> Result<(), StacError> {
        if let Some(limit) = self.limit {
            if limit < 1 || limit > MAX_LIMIT {
                return Err(StacError::InvalidParameter(format!(
                    "limit must be between 1 and {}",
                    MAX_LIMIT
                )));
            }
        }

        if let Some(bbox) = &self.bbox {
            if bbox.len() != 4 && bbox.len() != 6 {
                return Err(StacError::InvalidParameter(
                    "bbox must have 4 or 6 coordinates".to_string(),
                ));
            }
            let (south, north) = match bbox.len() {
                4 => (bbox[1], bbox[3]),
                _ => (bbox[1], bbox[4]),
            };
            if south > north {
                return Err(StacError::InvalidParameter(
                    "bbox south bound exceeds north bound".to_string(),
                ));
            }
        }

        if let Some(datetime) = &self.datetime {
            parse_datetime_interval(datetime)?;
        }

        Ok(())
    }

    /// The horizontal bbox rendered for the upstream query, if one was given.
    pub fn bbox_query_value(&self) -> Option<String> {
        let bbox = self.bbox.as_ref()?;
        let horizontal: Vec<f64> = match bbox.len() {
            6 => vec![bbox[0], bbox[1], bbox[3], bbox[4]],
            _ => bbox.clone(),
        };
        Some(
            horizontal
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// The datetime filter split into start and end bounds.
    pub fn interval(&self) -> Result<(Option<String>, Option<String>), StacError> {
        match &self.datetime {
            None => Ok((None, None)),
            Some(datetime) => parse_datetime_interval(datetime),
        }
    }
}

/// Split a datetime filter into its start and end bounds.
///
/// Accepts a single instant (`A`), a closed interval (`A/B`), and
/// half-open intervals (`A/..`, `../B`). Bounds must be RFC 3339
/// timestamps.
pub fn parse_datetime_interval(
    datetime: &str,
) -> Result<(Option<String>, Option<String>), StacError> {
    if datetime.is_empty() {
        return Err(StacError::InvalidParameter(
            "datetime must not be empty".to_string(),
        ));
    }

    let parts: Vec<&str> = datetime.split('/').collect();
    match parts.as_slice() {
        [instant] => {
            let instant = parse_bound(instant)?;
            Ok((Some(instant.clone()), Some(instant)))
        }
        [start, end] => {
            let start = (!start.is_empty() && *start != "..")
                .then(|| parse_bound(start))
                .transpose()?;
            let end = (!end.is_empty() && *end != "..")
                .then(|| parse_bound(end))
                .transpose()?;
            if start.is_none() && end.is_none() {
                return Err(StacError::InvalidParameter(
                    "datetime interval must have at least one bound".to_string(),
                ));
            }
            Ok((start, end))
        }
        _ => Err(StacError::InvalidParameter(format!(
            "invalid datetime interval: {}",
            datetime
        ))),
    }
}

fn parse_bound(value: &str) -> Result<String, StacError> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map_err(|_| StacError::InvalidParameter(format!("invalid datetime: {}", value)))?;
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let request = SearchRequest::default();
        assert_eq!(request.limit(), 10);
    }

    #[test]
    fn test_limit_bounds() {
        let request = SearchRequest {
            limit: Some(0),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = SearchRequest {
            limit: Some(10_001),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = SearchRequest {
            limit: Some(100),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_bbox_validation() {
        let request = SearchRequest {
            bbox: Some(vec![0.0, 50.0, 10.0]),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = SearchRequest {
            bbox: Some(vec![0.0, 60.0, 10.0, 50.0]),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = SearchRequest {
            bbox: Some(vec![0.0, 50.0, 10.0, 60.0]),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_bbox_query_value_drops_vertical_bounds() {
        let request = SearchRequest {
            bbox: Some(vec![0.0, 50.0, 100.0, 10.0, 60.0, 200.0]),
            ..Default::default()
        };
        assert_eq!(request.bbox_query_value(), Some("0,50,10,60".to_string()));
    }

    #[test]
    fn test_interval_forms() {
        assert_eq!(
            parse_datetime_interval("2020-02-01T00:00:00Z").unwrap(),
            (
                Some("2020-02-01T00:00:00Z".to_string()),
                Some("2020-02-01T00:00:00Z".to_string())
            )
        );
        assert_eq!(
            parse_datetime_interval("2020-02-01T00:00:00Z/2020-02-20T23:59:59Z").unwrap(),
            (
                Some("2020-02-01T00:00:00Z".to_string()),
                Some("2020-02-20T23:59:59Z".to_string())
            )
        );
        assert_eq!(
            parse_datetime_interval("2020-02-01T00:00:00Z/..").unwrap(),
            (Some("2020-02-01T00:00:00Z".to_string()), None)
        );
        assert_eq!(
            parse_datetime_interval("../2020-02-20T23:59:59Z").unwrap(),
            (None, Some("2020-02-20T23:59:59Z".to_string()))
        );
    }

    #[test]
    fn test_interval_rejects_degenerate_forms() {
        assert!(parse_datetime_interval("").is_err());
        assert!(parse_datetime_interval("../..").is_err());
        assert!(parse_datetime_interval("a/b/c").is_err());
    }

    #[test]
    fn test_interval_rejects_non_timestamps() {
        assert!(parse_datetime_interval("yesterday").is_err());
        assert!(parse_datetime_interval("2020-02-01T00:00:00Z/tomorrow").is_err());
    }

    #[test]
    fn test_body_deserialization_ignores_unknown_fields() {
        let body = serde_json::json!({
            "collections": ["a"],
            "limit": 5,
            "token": "a,1,20",
            "filter-lang": "cql2-json"
        });
        let request: SearchRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.collections, vec!["a"]);
        assert_eq!(request.limit(), 5);
        assert_eq!(request.token.as_deref(), Some("a,1,20"));
    }
}
