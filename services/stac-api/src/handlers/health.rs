//! Health handlers.

use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use catalogue_client::CollectionFilter;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub catalogue: String,
}

/// GET /health - Basic liveness check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /ready - Readiness check (verifies catalogue connectivity)
pub async fn ready_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> (StatusCode, Json<ReadyResponse>) {
    let catalogue_status = match state
        .catalogue
        .list_collections(&CollectionFilter::default())
        .await
    {
        Ok(_) => "ok".to_string(),
        Err(err) => format!("error: {}", err),
    };

    let ready = catalogue_status == "ok";
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadyResponse {
            ready,
            catalogue: catalogue_status,
        }),
    )
}
