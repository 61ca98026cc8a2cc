//! Collections endpoint handlers.

use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::Json;
use stac_protocol::{Collection, CollectionList};

use crate::handlers::ApiError;
use crate::search;
use crate::state::AppState;

/// GET /collections - List all collections
pub async fn list_collections_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<CollectionList>, ApiError> {
    let collections =
        search::fetch_all_collections(state.catalogue.as_ref(), &state.base_url).await?;
    Ok(Json(CollectionList::new(collections, &state.base_url)))
}

/// GET /collections/:collection_id - Get a specific collection
pub async fn get_collection_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(collection_id): Path<String>,
) -> Result<Json<Collection>, ApiError> {
    let collection =
        search::fetch_collection(state.catalogue.as_ref(), &collection_id, &state.base_url)
            .await?;
    Ok(Json(collection))
}
