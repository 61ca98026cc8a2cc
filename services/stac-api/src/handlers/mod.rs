//! HTTP request handlers for the STAC API.

pub mod collections;
pub mod conformance;
pub mod health;
pub mod items;
pub mod landing;
pub mod search;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stac_protocol::StacError;

/// Axum adapter for the protocol error taxonomy.
pub struct ApiError(pub StacError);

impl From<StacError> for ApiError {
    fn from(err: StacError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(self.0.to_exception())).into_response()
    }
}
