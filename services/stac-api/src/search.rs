//! Cross-collection search orchestration.
//!
//! A search targets an ordered list of catalogue collections but each page
//! reads from exactly one of them. The cursor tracks which collection the
//! page came from, the next offset inside it, and the total hit count known
//! for it; once a collection is exhausted the cursor advances to the next
//! one with a freshly-fetched total.

use std::collections::HashSet;

use catalogue_client::{CatalogueClient, CatalogueError, CollectionFilter, ProductFilter};
use stac_protocol::{Collection, Item, PageCursor, SearchRequest, StacError};
use tracing::debug;

use crate::adapter::{map_collection, map_item};

/// One page of search results and the cursor of the following page.
#[derive(Debug)]
pub struct SearchPage {
    /// The mapped items of this page.
    pub items: Vec<Item>,

    /// Continuation cursor, absent on the last page.
    pub next: Option<PageCursor>,
}

/// Execute a search request against the catalogue.
pub async fn execute(
    catalogue: &dyn CatalogueClient,
    request: &SearchRequest,
    base_url: &str,
) -> Result<SearchPage, StacError> {
    request.validate()?;

    match &request.ids {
        Some(ids) => lookup_ids(catalogue, ids, &request.collections, base_url).await,
        None => paged_listing(catalogue, request, base_url).await,
    }
}

/// Resolve an empty collection list to every catalogue collection.
///
/// Collection order is the catalogue's listing order, which fixes the paging
/// order for collection-less searches.
pub async fn resolve_collections(
    catalogue: &dyn CatalogueClient,
    request: &mut SearchRequest,
) -> Result<(), StacError> {
    if request.collections.is_empty() {
        let collections = catalogue
            .list_collections(&CollectionFilter::default())
            .await
            .map_err(upstream)?;
        request.collections = collections.into_iter().map(|c| c.id).collect();
    }
    Ok(())
}

/// Look up explicitly requested item identifiers.
///
/// Each distinct id probes the target collections in listed order and the
/// first collection with exactly one match wins. An upstream failure for a
/// (id, collection) pair counts as no match there; ids matched nowhere are
/// dropped without error. The result is a single unpaged page.
async fn lookup_ids(
    catalogue: &dyn CatalogueClient,
    ids: &[String],
    collections: &[String],
    base_url: &str,
) -> Result<SearchPage, StacError> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for id in ids.iter().filter(|id| seen.insert(id.as_str())) {
        for collection_id in collections {
            let filter = ProductFilter::by_uid(id);
            let found = match catalogue.list_products(collection_id, &filter, None, None).await {
                Ok(products) => products,
                Err(err) => {
                    debug!(collection = %collection_id, id = %id, error = %err,
                        "id probe failed, trying next collection");
                    continue;
                }
            };
            if found.len() == 1 {
                items.push(map_item(&found[0], collection_id, base_url)?);
                break;
            }
        }
    }

    Ok(SearchPage { items, next: None })
}

/// Serve one page of a filtered listing and compute the next cursor.
async fn paged_listing(
    catalogue: &dyn CatalogueClient,
    request: &SearchRequest,
    base_url: &str,
) -> Result<SearchPage, StacError> {
    let limit = request.limit();
    let filter = product_filter(request)?;

    let cursor = match &request.token {
        Some(token) => {
            let cursor = PageCursor::decode(token)?;
            if !request.collections.contains(&cursor.collection) {
                return Err(StacError::InvalidToken(format!(
                    "token collection {} is not among the requested collections",
                    cursor.collection
                )));
            }
            cursor
        }
        None => {
            let first = request.collections.first().ok_or_else(|| {
                StacError::InvalidParameter("collections must not be empty".to_string())
            })?;
            let total = catalogue.count_products(first, &filter).await.map_err(upstream)?;
            PageCursor::new(first.clone(), 1, total)
        }
    };

    let next = next_cursor(catalogue, request, &filter, &cursor, limit).await?;

    let products = catalogue
        .list_products(&cursor.collection, &filter, Some(limit), Some(cursor.start_index))
        .await
        .map_err(upstream)?;

    let items = products
        .iter()
        .map(|p| map_item(p, &cursor.collection, base_url))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SearchPage { items, next })
}

/// Compute the cursor of the page after `cursor`.
///
/// Stays inside the current collection while it has unread hits, otherwise
/// advances to the next requested collection (counting its hits under the
/// same filters), and ends the result set when none remains.
async fn next_cursor(
    catalogue: &dyn CatalogueClient,
    request: &SearchRequest,
    filter: &ProductFilter,
    cursor: &PageCursor,
    limit: usize,
) -> Result<Option<PageCursor>, StacError> {
    if cursor.start_index + limit - 1 < cursor.total {
        return Ok(Some(PageCursor::new(
            cursor.collection.clone(),
            cursor.start_index + limit,
            cursor.total,
        )));
    }

    let position = request
        .collections
        .iter()
        .position(|c| *c == cursor.collection);
    match position.and_then(|i| request.collections.get(i + 1)) {
        Some(next_collection) => {
            let total = catalogue
                .count_products(next_collection, filter)
                .await
                .map_err(upstream)?;
            Ok(Some(PageCursor::new(next_collection.clone(), 1, total)))
        }
        None => Ok(None),
    }
}

/// Fetch and map a single collection.
///
/// Zero matches, multiple matches, and upstream query failures all surface
/// as not-found; existence checks never leak dependency errors.
pub async fn fetch_collection(
    catalogue: &dyn CatalogueClient,
    id: &str,
    base_url: &str,
) -> Result<Collection, StacError> {
    let collections = catalogue
        .list_collections(&CollectionFilter::by_uid(id))
        .await
        .unwrap_or_else(|err| {
            debug!(collection = %id, error = %err, "collection probe failed");
            Vec::new()
        });

    match collections.as_slice() {
        [collection] => Ok(map_collection(collection, base_url)),
        _ => Err(StacError::CollectionNotFound(format!(
            "Collection {} does not exist.",
            id
        ))),
    }
}

/// Fetch and map every catalogue collection.
pub async fn fetch_all_collections(
    catalogue: &dyn CatalogueClient,
    base_url: &str,
) -> Result<Vec<Collection>, StacError> {
    let collections = catalogue
        .list_collections(&CollectionFilter::default())
        .await
        .map_err(upstream)?;
    Ok(collections
        .iter()
        .map(|c| map_collection(c, base_url))
        .collect())
}

/// Fetch and map a single item, checking collection existence first.
///
/// Unlike the existence checks, an upstream failure during the product
/// lookup propagates as a dependency error instead of masquerading as a
/// missing item.
pub async fn fetch_item(
    catalogue: &dyn CatalogueClient,
    collection_id: &str,
    item_id: &str,
    base_url: &str,
) -> Result<Item, StacError> {
    fetch_collection(catalogue, collection_id, base_url).await?;

    let products = catalogue
        .list_products(collection_id, &ProductFilter::by_uid(item_id), None, None)
        .await
        .map_err(upstream)?;

    match products.as_slice() {
        [product] => map_item(product, collection_id, base_url),
        _ => Err(StacError::ItemNotFound(format!(
            "Item {} does not exist in collection {}.",
            item_id, collection_id
        ))),
    }
}

fn product_filter(request: &SearchRequest) -> Result<ProductFilter, StacError> {
    let (start, end) = request.interval()?;
    Ok(ProductFilter {
        uid: None,
        start,
        end,
        bbox: request.bbox_query_value(),
        geometry: request.intersects.as_ref().map(|g| g.to_wkt()),
    })
}

fn upstream(err: CatalogueError) -> StacError {
    StacError::Upstream(err.to_string())
}
