//! Cursor-based pagination across catalogue collections.
//!
//! A search over several collections pages through them one at a time. The
//! continuation state — which collection, the next offset within it, and the
//! total hit count known for it — travels to the client as a single opaque
//! token and comes back on the next request. No state is kept server-side.

use serde_json::Value;
use thiserror::Error;

use crate::types::Link;

/// Errors that can occur when decoding a pagination token.
#[derive(Debug, Error, PartialEq)]
pub enum CursorError {
    /// The token does not have the expected three fields.
    #[error("pagination token must have the form <collection>,<offset>,<total>")]
    Malformed,

    /// A numeric token field did not parse.
    #[error("invalid numeric field in pagination token: {0}")]
    InvalidNumber(String),
}

/// Continuation state for one page of a cross-collection search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    /// Identifier of the collection the next page reads from.
    pub collection: String,

    /// 1-based offset of the next page within that collection.
    pub start_index: usize,

    /// Total hit count for that collection, fetched when the cursor first
    /// entered it.
    pub total: usize,
}

impl PageCursor {
    /// Create a new cursor.
    pub fn new(collection: impl Into<String>, start_index: usize, total: usize) -> Self {
        Self {
            collection: collection.into(),
            start_index,
            total,
        }
    }

    /// Serialize the cursor to its opaque token form.
    pub fn encode(&self) -> String {
        format!("{},{},{}", self.collection, self.start_index, self.total)
    }

    /// Parse a client-supplied token.
    ///
    /// The numeric fields are taken from the right, so collection
    /// identifiers containing the delimiter still round-trip.
    pub fn decode(token: &str) -> Result<Self, CursorError> {
        let parts: Vec<&str> = token.rsplitn(3, ',').collect();
        if parts.len() != 3 || parts[2].is_empty() {
            return Err(CursorError::Malformed);
        }

        let total = parts[0]
            .parse::<usize>()
            .map_err(|_| CursorError::InvalidNumber(parts[0].to_string()))?;
        let start_index = parts[1]
            .parse::<usize>()
            .map_err(|_| CursorError::InvalidNumber(parts[1].to_string()))?;

        Ok(Self {
            collection: parts[2].to_string(),
            start_index,
            total,
        })
    }
}

/// Builds the "next" link of a paged response.
///
/// Read-style requests get their original URL back with the token substituted
/// as a query parameter; submit-style requests get the endpoint URL plus the
/// original body with the token field overwritten.
#[derive(Debug, Clone)]
pub struct PagingLinks {
    method: String,
    url: String,
    body: Option<Value>,
    next_token: Option<String>,
}

impl PagingLinks {
    /// Create a link builder for a request.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            body: None,
            next_token: None,
        }
    }

    /// Attach the original request body (submit-style requests).
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach the token of the next page, if there is one.
    pub fn with_next_token(mut self, token: Option<String>) -> Self {
        self.next_token = token;
        self
    }

    /// Create the `next` link, if a next page exists.
    pub fn next(&self) -> Option<Link> {
        let token = self.next_token.as_deref()?;

        match self.method.as_str() {
            "GET" => Some(
                Link::new(set_query_param(&self.url, "token", token), "next")
                    .with_method("GET"),
            ),
            "POST" => {
                let mut body = self.body.clone().unwrap_or_else(|| Value::Object(Default::default()));
                if let Some(fields) = body.as_object_mut() {
                    fields.insert("token".to_string(), Value::String(token.to_string()));
                }
                Some(
                    Link::new(&self.url, "next")
                        .with_method("POST")
                        .with_body(body),
                )
            }
            _ => None,
        }
    }

    /// Return all pagination links.
    pub fn create_links(&self) -> Vec<Link> {
        self.next().into_iter().collect()
    }
}

/// Add or replace a query parameter in a URL, percent-encoding the value.
pub fn set_query_param(url: &str, key: &str, value: &str) -> String {
    let encoded = urlencoding::encode(value);

    match url.split_once('?') {
        None => format!("{}?{}={}", url, key, encoded),
        Some((base, query)) => {
            let mut pairs: Vec<String> = Vec::new();
            let mut replaced = false;
            for pair in query.split('&').filter(|p| !p.is_empty()) {
                let name = pair.split('=').next().unwrap_or("");
                if name == key {
                    if !replaced {
                        pairs.push(format!("{}={}", key, encoded));
                        replaced = true;
                    }
                } else {
                    pairs.push(pair.to_string());
                }
            }
            if !replaced {
                pairs.push(format!("{}={}", key, encoded));
            }
            format!("{}?{}", base, pairs.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cursor_round_trip() {
        let cursor = PageCursor::new("urn:eop:DEMO:S2_TOC_V2", 11, 15);
        let decoded = PageCursor::decode(&cursor.encode()).unwrap();
        assert_eq!(decoded, cursor);
    }

    #[test]
    fn test_cursor_round_trip_with_delimiter_in_collection() {
        // Numeric fields parse from the right, so a comma in the collection
        // identifier survives the round trip.
        let cursor = PageCursor::new("weird,id", 1, 7);
        let decoded = PageCursor::decode(&cursor.encode()).unwrap();
        assert_eq!(decoded, cursor);
    }

    #[test]
    fn test_cursor_decode_wrong_arity() {
        assert_eq!(PageCursor::decode("only-a-name"), Err(CursorError::Malformed));
        assert_eq!(PageCursor::decode("a,1"), Err(CursorError::Malformed));
        assert_eq!(PageCursor::decode(""), Err(CursorError::Malformed));
        assert_eq!(PageCursor::decode(",1,2"), Err(CursorError::Malformed));
    }

    #[test]
    fn test_cursor_decode_non_numeric() {
        assert_eq!(
            PageCursor::decode("collection,eleven,15"),
            Err(CursorError::InvalidNumber("eleven".to_string()))
        );
        assert_eq!(
            PageCursor::decode("collection,11,"),
            Err(CursorError::InvalidNumber("".to_string()))
        );
    }

    #[test]
    fn test_set_query_param_appends() {
        assert_eq!(
            set_query_param("http://h/search", "token", "a,1,2"),
            "http://h/search?token=a%2C1%2C2"
        );
        assert_eq!(
            set_query_param("http://h/search?limit=5", "token", "a,1,2"),
            "http://h/search?limit=5&token=a%2C1%2C2"
        );
    }

    #[test]
    fn test_set_query_param_replaces() {
        assert_eq!(
            set_query_param("http://h/search?token=old&limit=5", "token", "new"),
            "http://h/search?token=new&limit=5"
        );
    }

    #[test]
    fn test_get_next_link() {
        let links = PagingLinks::new("GET", "http://h/search?limit=10")
            .with_next_token(Some("c,11,15".to_string()));

        let next = links.next().unwrap();
        assert_eq!(next.rel, "next");
        assert_eq!(next.method, Some("GET".to_string()));
        assert_eq!(next.href, "http://h/search?limit=10&token=c%2C11%2C15");
        assert!(next.body.is_none());
    }

    #[test]
    fn test_post_next_link_echoes_body() {
        let body = json!({"collections": ["a", "b"], "limit": 10});
        let links = PagingLinks::new("POST", "http://h/search")
            .with_body(body.clone())
            .with_next_token(Some("a,11,15".to_string()));

        let next = links.next().unwrap();
        assert_eq!(next.method, Some("POST".to_string()));
        assert_eq!(next.href, "http://h/search");

        let echoed = next.body.unwrap();
        assert_eq!(echoed["collections"], body["collections"]);
        assert_eq!(echoed["limit"], body["limit"]);
        assert_eq!(echoed["token"], json!("a,11,15"));
    }

    #[test]
    fn test_post_next_link_overwrites_stale_token() {
        let links = PagingLinks::new("POST", "http://h/search")
            .with_body(json!({"token": "a,1,15"}))
            .with_next_token(Some("a,11,15".to_string()));

        let next = links.next().unwrap();
        assert_eq!(next.body.unwrap()["token"], json!("a,11,15"));
    }

    #[test]
    fn test_no_token_no_link() {
        let links = PagingLinks::new("GET", "http://h/search");
        assert!(links.next().is_none());
        assert!(links.create_links().is_empty());
    }
}
