//! Integration tests for `SearchClient` using wiremock HTTP mocks.

use listify_core::SearchCredentials;
use listify_search::{SearchClient, SearchError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> SearchClient {
    let credentials = SearchCredentials {
        api_key: "test-key".to_owned(),
        engine_id: "test-cx".to_owned(),
    };
    SearchClient::with_base_url(Some(credentials), 5, "listify-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn total_results_returns_parsed_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("key", "test-key"))
        .and(query_param("cx", "test-cx"))
        .and(query_param("q", "running shoes"))
        .and(query_param("num", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "searchInformation": { "totalResults": "52300" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let total = client
        .total_results("running shoes")
        .await
        .expect("should parse count");

    assert_eq!(total, 52_300);
}

#[tokio::test]
async fn total_results_is_zero_when_count_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "customsearch#search"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let total = client.total_results("obscure").await.expect("should succeed");
    assert_eq!(total, 0);
}

#[tokio::test]
async fn search_returns_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("num", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "searchInformation": { "totalResults": "3" },
            "items": [
                { "title": "Trail Runner - $89.99", "snippet": "Free shipping", "link": "https://a.example" },
                { "title": "Trail Runner", "snippet": "Now USD 75" }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .search("trail runner price buy", 10)
        .await
        .expect("should parse items");

    assert_eq!(response.items.len(), 2);
    assert_eq!(response.items[0].link.as_deref(), Some("https://a.example"));
    assert_eq!(response.items[1].snippet, "Now USD 75");
}

#[tokio::test]
async fn rate_limit_maps_to_quota_exceeded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.total_results("anything").await.unwrap_err();
    assert!(
        matches!(err, SearchError::QuotaExceeded),
        "expected QuotaExceeded, got {err:?}"
    );
}

#[tokio::test]
async fn server_error_maps_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.total_results("anything").await.unwrap_err();
    match err {
        SearchError::UnexpectedStatus { status, url } => {
            assert_eq!(status, 503);
            assert!(!url.contains("test-key"), "api key leaked into error: {url}");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.total_results("anything").await.unwrap_err();
    assert!(
        matches!(err, SearchError::Deserialize { .. }),
        "expected Deserialize, got {err:?}"
    );
}

#[tokio::test]
async fn missing_credentials_send_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = SearchClient::with_base_url(None, 5, "listify-test/0.1", &server.uri())
        .expect("client construction should not fail");
    let err = client.total_results("anything").await.unwrap_err();
    assert!(matches!(err, SearchError::NotConfigured));
}
