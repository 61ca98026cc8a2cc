//! Router assembly.

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Landing page and conformance
        .route("/", get(handlers::landing::landing_handler))
        .route("/conformance", get(handlers::conformance::conformance_handler))
        // Collections
        .route(
            "/collections",
            get(handlers::collections::list_collections_handler),
        )
        .route(
            "/collections/:collection_id",
            get(handlers::collections::get_collection_handler),
        )
        // Items
        .route(
            "/collections/:collection_id/items",
            get(handlers::items::list_items_handler),
        )
        .route(
            "/collections/:collection_id/items/:item_id",
            get(handlers::items::get_item_handler),
        )
        // Search
        .route(
            "/search",
            get(handlers::search::get_search_handler).post(handlers::search::post_search_handler),
        )
        // Health
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
