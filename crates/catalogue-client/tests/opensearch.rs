//! Mock catalogue tests for the HTTP client.
//!
//! These tests use wiremock to simulate the upstream OpenSearch catalogue
//! and exercise query rendering, envelope decoding, and failure handling
//! without network access.

use catalogue_client::{
    CatalogueClient, CatalogueError, CollectionFilter, OpenSearchCatalogue, ProductFilter,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_catalogue(server: &MockServer) -> OpenSearchCatalogue {
    OpenSearchCatalogue::new(server.uri()).unwrap()
}

fn product_feature(id: &str, collection: &str) -> serde_json::Value {
    json!({
        "type": "Feature",
        "id": id,
        "bbox": [4.8, 51.1, 5.0, 51.3],
        "geometry": {"type": "Point", "coordinates": [4.9, 51.2]},
        "properties": {
            "date": "2022-01-07T10:44:31Z",
            "title": id,
            "published": "2022-01-08T00:00:00Z",
            "updated": "2022-01-09T00:00:00Z",
            "parentIdentifier": collection,
            "acquisitionInformation": [
                {"acquisitionParameters": {
                    "beginningDateTime": "2022-01-07T10:44:31Z",
                    "endingDateTime": "2022-01-07T10:44:31Z"
                }}
            ],
            "links": {"data": [{"href": "https://data.example.com/f.tif", "type": "image/tiff"}]}
        }
    })
}

#[tokio::test]
async fn test_list_collections() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": {"totalResults": 1},
            "features": [{
                "id": "urn:eop:DEMO:S2_TOC_V2",
                "bbox": [-180.0, -56.0, 180.0, 83.0],
                "properties": {
                    "date": "2019-01-01T00:00:00Z/",
                    "title": "Sentinel-2 TOC",
                    "abstract": "Top of canopy reflectances",
                    "rights": "proprietary",
                    "keyword": ["optical"]
                }
            }]
        })))
        .mount(&server)
        .await;

    let catalogue = mock_catalogue(&server);
    let collections = catalogue
        .list_collections(&CollectionFilter::default())
        .await
        .unwrap();

    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].id, "urn:eop:DEMO:S2_TOC_V2");
}

#[tokio::test]
async fn test_list_collections_by_uid_sends_uid_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .and(query_param("uid", "urn:eop:DEMO:S2_TOC_V2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": []})))
        .expect(1)
        .mount(&server)
        .await;

    let catalogue = mock_catalogue(&server);
    let collections = catalogue
        .list_collections(&CollectionFilter::by_uid("urn:eop:DEMO:S2_TOC_V2"))
        .await
        .unwrap();

    assert!(collections.is_empty());
}

#[tokio::test]
async fn test_list_products_renders_paging_and_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("collection", "urn:eop:DEMO:S2_TOC_V2"))
        .and(query_param("start", "2020-02-01T00:00:00Z"))
        .and(query_param("bbox", "0,50,10,60"))
        .and(query_param("count", "10"))
        .and(query_param("startIndex", "11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": {"totalResults": 15},
            "features": [product_feature("p11", "urn:eop:DEMO:S2_TOC_V2")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = ProductFilter {
        start: Some("2020-02-01T00:00:00Z".to_string()),
        bbox: Some("0,50,10,60".to_string()),
        ..Default::default()
    };

    let catalogue = mock_catalogue(&server);
    let products = catalogue
        .list_products("urn:eop:DEMO:S2_TOC_V2", &filter, Some(10), Some(11))
        .await
        .unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "p11");
}

#[tokio::test]
async fn test_count_products() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("count", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": {"totalResults": 37},
            "features": []
        })))
        .mount(&server)
        .await;

    let catalogue = mock_catalogue(&server);
    let count = catalogue
        .count_products("urn:eop:DEMO:S2_TOC_V2", &ProductFilter::default())
        .await
        .unwrap();

    assert_eq!(count, 37);
}

#[tokio::test]
async fn test_count_without_total_results_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": []})))
        .mount(&server)
        .await;

    let catalogue = mock_catalogue(&server);
    let result = catalogue
        .count_products("urn:eop:DEMO:S2_TOC_V2", &ProductFilter::default())
        .await;

    assert!(matches!(result, Err(CatalogueError::Decode(_))));
}

#[tokio::test]
async fn test_server_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let catalogue = mock_catalogue(&server);
    let result = catalogue
        .list_products("urn:eop:DEMO:S2_TOC_V2", &ProductFilter::default(), None, None)
        .await;

    match result {
        Err(CatalogueError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let catalogue = mock_catalogue(&server);
    let result = catalogue.list_collections(&CollectionFilter::default()).await;

    assert!(matches!(result, Err(CatalogueError::Decode(_))));
}
