//! Search API wire-contract tests.
//!
//! These tests verify the exact HTTP behaviour of [`SearchClient`] against a
//! mock backend: request format, query encoding, response decoding, and the
//! empty-on-failure collapse for every failure mode.

use hyperserp_client::{ClientConfig, SearchClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SearchClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    SearchClient::new(config).expect("client")
}

// ────────────────────────────────────────────────────────────────────────────
// Request format
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn request_is_get_on_search_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "cats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let results = client.search("cats").await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn reserved_characters_arrive_as_a_single_query_value() {
    let mock_server = MockServer::start().await;

    // `a&b` must be one `q` value, not split into a second parameter.
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "a&b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.search("a&b").await;
}

#[tokio::test]
async fn request_carries_configured_top_k() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("top_k", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig {
        base_url: mock_server.uri(),
        top_k: 3,
        ..Default::default()
    };
    let client = SearchClient::new(config).expect("client");
    client.search("cats").await;
}

// ────────────────────────────────────────────────────────────────────────────
// Response decoding
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn results_decode_with_optional_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "cats",
            "expansions": ["cat breeds"],
            "results": [
                {
                    "id": "doc-1",
                    "title": "A",
                    "url": "http://a",
                    "snippet": "s",
                    "summary": null,
                    "topic": null,
                    "score": 1.5
                },
                { "title": "B", "url": "http://b" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.search_response("cats").await;

    assert_eq!(response.results.len(), 2);
    assert_eq!(response.expansions, vec!["cat breeds".to_string()]);

    let first = &response.results[0];
    assert_eq!(first.title.as_deref(), Some("A"));
    assert_eq!(first.url.as_deref(), Some("http://a"));
    assert_eq!(first.snippet.as_deref(), Some("s"));
    assert!(first.summary.is_none());

    let second = &response.results[1];
    assert_eq!(second.title.as_deref(), Some("B"));
    assert!(second.snippet.is_none());
}

#[tokio::test]
async fn missing_results_field_resolves_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "query": "cats" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let results = client.search("cats").await;
    assert!(results.is_empty());
}

// ────────────────────────────────────────────────────────────────────────────
// Failure collapse
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn server_error_resolves_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let results = client.search("cats").await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn not_found_resolves_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let results = client.search("cats").await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn non_json_body_resolves_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let results = client.search("cats").await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn wrong_json_shape_resolves_to_empty() {
    let mock_server = MockServer::start().await;

    // `results` must be an array; a string is a decode failure.
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": "oops" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let results = client.search("cats").await;
    assert!(results.is_empty());
}
