//! Search endpoint handlers.
//!
//! GET and POST carry the same logical search; the difference is parameter
//! encoding (comma-lists and JSON strings vs a JSON body) and the shape of
//! the next-page link, which echoes the body for POST.

use std::sync::Arc;

use axum::extract::{Extension, OriginalUri, Query};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use stac_protocol::{ItemCollection, PagingLinks, SearchRequest, StacError};

use crate::handlers::ApiError;
use crate::search;
use crate::state::AppState;

/// Raw query parameters of the GET search endpoint.
///
/// Numeric and structured fields arrive as strings and are parsed here so
/// a malformed value produces a proper exception body instead of an
/// extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub collections: Option<String>,
    pub ids: Option<String>,
    pub bbox: Option<String>,
    pub datetime: Option<String>,
    pub limit: Option<String>,
    pub query: Option<String>,
    pub token: Option<String>,
    pub fields: Option<String>,
    pub sortby: Option<String>,
}

impl SearchParams {
    /// Parse the raw parameters into a search request.
    pub fn into_request(self) -> Result<SearchRequest, StacError> {
        let limit = self
            .limit
            .map(|value| {
                value.parse::<usize>().map_err(|_| {
                    StacError::InvalidParameter(format!("limit must be an integer, got {}", value))
                })
            })
            .transpose()?;

        let bbox = self.bbox.map(|value| parse_bbox(&value)).transpose()?;

        let query = self
            .query
            .map(|value| {
                serde_json::from_str::<Value>(&value)
                    .map_err(|_| StacError::InvalidParameter("query must be valid JSON".to_string()))
            })
            .transpose()?;

        Ok(SearchRequest {
            collections: self.collections.map(split_csv).unwrap_or_default(),
            ids: self.ids.map(split_csv).filter(|ids| !ids.is_empty()),
            bbox,
            datetime: self.datetime,
            intersects: None,
            limit,
            query,
            token: self.token,
            fields: self.fields.map(Value::String),
            sortby: self.sortby.map(Value::String),
        })
    }
}

fn split_csv(value: String) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bbox(value: &str) -> Result<Vec<f64>, StacError> {
    value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| {
            StacError::InvalidParameter("bbox must be a comma-separated list of numbers".to_string())
        })
}

/// GET /search - Cross-collection search
pub async fn get_search_handler(
    Extension(state): Extension<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<SearchParams>,
) -> Result<Json<ItemCollection>, ApiError> {
    let mut request = params.into_request()?;
    search::resolve_collections(state.catalogue.as_ref(), &mut request).await?;

    let page = search::execute(state.catalogue.as_ref(), &request, &state.base_url).await?;

    let request_url = format!("{}{}", state.base_url, uri);
    let links = PagingLinks::new("GET", request_url)
        .with_next_token(page.next.map(|cursor| cursor.encode()))
        .create_links();

    Ok(Json(ItemCollection::new(page.items, links)))
}

/// POST /search - Cross-collection search with a JSON body
pub async fn post_search_handler(
    Extension(state): Extension<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<Value>,
) -> Result<Json<ItemCollection>, ApiError> {
    let mut request: SearchRequest = serde_json::from_value(body.clone())
        .map_err(|err| StacError::InvalidParameter(format!("invalid search body: {}", err)))?;
    search::resolve_collections(state.catalogue.as_ref(), &mut request).await?;

    let page = search::execute(state.catalogue.as_ref(), &request, &state.base_url).await?;

    // The next link re-targets the same endpoint and echoes the client's
    // body with the token field overwritten.
    let request_url = format!("{}{}", state.base_url, uri);
    let links = PagingLinks::new("POST", request_url)
        .with_body(body)
        .with_next_token(page.next.map(|cursor| cursor.encode()))
        .create_links();

    Ok(Json(ItemCollection::new(page.items, links)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_request_splits_lists() {
        let params = SearchParams {
            collections: Some("A, B,,C".to_string()),
            ids: Some("i1,i2".to_string()),
            bbox: Some("0, 50, 10, 60".to_string()),
            limit: Some("25".to_string()),
            ..Default::default()
        };

        let request = params.into_request().unwrap();
        assert_eq!(request.collections, vec!["A", "B", "C"]);
        assert_eq!(request.ids, Some(vec!["i1".to_string(), "i2".to_string()]));
        assert_eq!(request.bbox, Some(vec![0.0, 50.0, 10.0, 60.0]));
        assert_eq!(request.limit, Some(25));
    }

    #[test]
    fn test_into_request_rejects_malformed_values() {
        let params = SearchParams {
            limit: Some("ten".to_string()),
            ..Default::default()
        };
        assert!(params.into_request().is_err());

        let params = SearchParams {
            bbox: Some("0,west,10,60".to_string()),
            ..Default::default()
        };
        assert!(params.into_request().is_err());

        let params = SearchParams {
            query: Some("{not json".to_string()),
            ..Default::default()
        };
        assert!(params.into_request().is_err());
    }

    #[test]
    fn test_into_request_parses_query_json() {
        let params = SearchParams {
            query: Some(r#"{"eo:cloud_cover": {"lt": 10}}"#.to_string()),
            ..Default::default()
        };

        let request = params.into_request().unwrap();
        assert!(request.query.is_some());
    }
}
