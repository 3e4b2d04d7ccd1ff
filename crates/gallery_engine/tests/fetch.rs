use std::time::Duration;

use gallery_engine::{
    FailureKind, FetchSettings, PageSource, ReqwestPageSource, ARTWORK_FIELDS, UNKNOWN,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer) -> ReqwestPageSource {
    let settings = FetchSettings {
        base_url: format!("{}/api/v1", server.uri()),
        ..FetchSettings::default()
    };
    ReqwestPageSource::new(settings).expect("client")
}

#[tokio::test]
async fn fetches_and_normalizes_one_based_page() {
    gallery_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/artworks"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "12"))
        .and(query_param("fields", ARTWORK_FIELDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": { "total": 129884, "limit": 12, "current_page": 2 },
            "data": [
                { "id": 13, "title": "First", "place_of_origin": "Japan",
                  "artist_display": "Hokusai", "inscriptions": null,
                  "date_start": 1830, "date_end": 1833 },
                { "id": 14, "title": "Second" }
            ]
        })))
        .mount(&server)
        .await;

    let page = source_for(&server).fetch_page(2).await.expect("fetch ok");

    assert_eq!(page.page_number, 2);
    assert_eq!(page.reported_total, Some(129884));
    assert_eq!(page.fetched_at, None);
    assert_eq!(page.records.len(), 2);
    assert_eq!(page.records[0].place_of_origin, "Japan");
    assert_eq!(page.records[0].inscriptions, None);
    assert_eq!(page.records[1].place_of_origin, UNKNOWN);
}

#[tokio::test]
async fn http_error_maps_to_status_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/artworks"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_page(1).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn missing_data_array_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/artworks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "detail": "nope" })))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_page(1).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Malformed);
}

#[tokio::test]
async fn configured_timeout_is_enforced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/artworks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "data": [] })),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        base_url: format!("{}/api/v1", server.uri()),
        request_timeout: Some(Duration::from_millis(50)),
        ..FetchSettings::default()
    };
    let source = ReqwestPageSource::new(settings).expect("client");

    let err = source.fetch_page(1).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/artworks"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string(r#"{"data":[{"id":1},{"id":2}]}"#),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        base_url: format!("{}/api/v1", server.uri()),
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let source = ReqwestPageSource::new(settings).expect("client");

    let err = source.fetch_page(1).await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 10, .. }
    ));
}

#[test]
fn page_url_tolerates_trailing_slash() {
    let settings = FetchSettings {
        base_url: "https://api.example.org/api/v1/".to_string(),
        page_size: 5,
        ..FetchSettings::default()
    };
    let url = ReqwestPageSource::new(settings)
        .expect("client")
        .page_url(3)
        .expect("url");

    assert_eq!(url.path(), "/api/v1/artworks");
    let pairs: Vec<_> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs[0], ("page".to_string(), "3".to_string()));
    assert_eq!(pairs[1], ("limit".to_string(), "5".to_string()));
}

#[test]
fn invalid_base_url_is_reported() {
    let settings = FetchSettings {
        base_url: "not a url".to_string(),
        ..FetchSettings::default()
    };
    let err = ReqwestPageSource::new(settings)
        .expect("client")
        .page_url(1)
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
