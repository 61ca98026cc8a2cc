//! STAC API error taxonomy.

use thiserror::Error;

use crate::pagination::CursorError;
use crate::responses::ExceptionResponse;

/// Errors that can occur while serving STAC API requests.
#[derive(Debug, Error)]
pub enum StacError {
    /// Collection identifier resolved to zero or multiple upstream records.
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Item identifier resolved to zero or multiple upstream records.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Malformed or out-of-range query parameter.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed pagination token.
    #[error("Invalid pagination token: {0}")]
    InvalidToken(String),

    /// A required nested field was missing from a matched upstream record.
    #[error("Malformed catalogue record: {0}")]
    MalformedRecord(String),

    /// The upstream catalogue query failed.
    #[error("Upstream catalogue error: {0}")]
    Upstream(String),
}

impl StacError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            StacError::CollectionNotFound(_) => 404,
            StacError::ItemNotFound(_) => 404,
            StacError::InvalidParameter(_) => 400,
            StacError::InvalidToken(_) => 400,
            StacError::MalformedRecord(_) => 500,
            StacError::Upstream(_) => 502,
        }
    }

    /// Convert to an ExceptionResponse.
    pub fn to_exception(&self) -> ExceptionResponse {
        match self {
            StacError::CollectionNotFound(msg) => ExceptionResponse::not_found(msg),
            StacError::ItemNotFound(msg) => ExceptionResponse::not_found(msg),
            StacError::InvalidParameter(msg) => ExceptionResponse::bad_request(msg),
            StacError::InvalidToken(msg) => ExceptionResponse::bad_request(msg),
            StacError::MalformedRecord(msg) => ExceptionResponse::internal_error(msg),
            StacError::Upstream(msg) => {
                ExceptionResponse::new("UpstreamError", msg)
            }
        }
    }
}

impl From<CursorError> for StacError {
    fn from(err: CursorError) -> Self {
        StacError::InvalidToken(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageCursor;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(StacError::CollectionNotFound("x".to_string()).status_code(), 404);
        assert_eq!(StacError::ItemNotFound("x".to_string()).status_code(), 404);
        assert_eq!(StacError::InvalidParameter("x".to_string()).status_code(), 400);
        assert_eq!(StacError::InvalidToken("x".to_string()).status_code(), 400);
        assert_eq!(StacError::MalformedRecord("x".to_string()).status_code(), 500);
        assert_eq!(StacError::Upstream("x".to_string()).status_code(), 502);
    }

    #[test]
    fn test_cursor_error_conversion() {
        let err: StacError = PageCursor::decode("garbage").unwrap_err().into();

        assert_eq!(err.status_code(), 400);
        let exc = err.to_exception();
        assert_eq!(exc.code, "InvalidQueryParameter");
    }

    #[test]
    fn test_error_to_exception() {
        let err = StacError::CollectionNotFound("Collection missing-id does not exist.".to_string());
        let exc = err.to_exception();

        assert_eq!(exc.code, "NotFoundError");
        assert!(exc.description.contains("missing-id"));
    }
}
