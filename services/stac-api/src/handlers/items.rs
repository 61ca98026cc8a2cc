//! Item endpoint handlers for a single collection.

use std::sync::Arc;

use axum::extract::{Extension, OriginalUri, Path, Query};
use axum::Json;
use serde::Deserialize;
use stac_protocol::collections::collection_links;
use stac_protocol::{Item, ItemCollection, PagingLinks, SearchRequest};

use crate::handlers::ApiError;
use crate::search;
use crate::state::AppState;

/// Query parameters of the item listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ItemsQuery {
    pub limit: Option<usize>,
    pub token: Option<String>,
}

/// GET /collections/:collection_id/items - List items of a collection
pub async fn list_items_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(collection_id): Path<String>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ItemsQuery>,
) -> Result<Json<ItemCollection>, ApiError> {
    // 404 before any listing work when the collection does not exist
    search::fetch_collection(state.catalogue.as_ref(), &collection_id, &state.base_url).await?;

    let request = SearchRequest {
        collections: vec![collection_id.clone()],
        limit: params.limit,
        token: params.token,
        ..Default::default()
    };
    let page = search::execute(state.catalogue.as_ref(), &request, &state.base_url).await?;

    let request_url = format!("{}{}", state.base_url, uri);
    let mut links = PagingLinks::new("GET", request_url)
        .with_next_token(page.next.map(|cursor| cursor.encode()))
        .create_links();
    links.extend(collection_links(&state.base_url, &collection_id));

    Ok(Json(ItemCollection::new(page.items, links)))
}

/// GET /collections/:collection_id/items/:item_id - Get a single item
pub async fn get_item_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((collection_id, item_id)): Path<(String, String)>,
) -> Result<Json<Item>, ApiError> {
    let item = search::fetch_item(
        state.catalogue.as_ref(),
        &collection_id,
        &item_id,
        &state.base_url,
    )
    .await?;
    Ok(Json(item))
}
