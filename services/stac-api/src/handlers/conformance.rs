//! Conformance declaration handler.

use axum::Json;
use stac_protocol::ConformanceClasses;

/// GET /conformance - Conformance classes
pub async fn conformance_handler() -> Json<ConformanceClasses> {
    Json(ConformanceClasses::current())
}
