//! Shared test helpers for Dify API integration tests
//!
//! Provides wiremock-based mock server setup for the Dify dataset
//! endpoints. Each helper mounts the necessary mock endpoints; the
//! returned client points at the mock server.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kbsync_core::domain::newtypes::DatasetId;
use kbsync_dify::client::DifyClient;

/// Dataset ID used by every integration test.
pub const TEST_DATASET: &str = "ds-test-001";

/// API key used by every integration test.
pub const TEST_API_KEY: &str = "test-api-key";

/// Starts a mock server and returns it together with a client bound to it.
pub async fn setup_dify_mock() -> (MockServer, DifyClient) {
    let server = MockServer::start().await;
    let client = DifyClient::with_base_url(
        TEST_API_KEY,
        DatasetId::new(TEST_DATASET).unwrap(),
        server.uri(),
    );
    (server, client)
}

/// Mounts the document search endpoint, returning `entries` for `keyword`.
///
/// The response mirrors the real listing shape (pagination fields included)
/// so parsing is exercised against realistic payloads.
pub async fn mount_search(server: &MockServer, keyword: &str, entries: serde_json::Value) {
    let total = entries.as_array().map(|a| a.len()).unwrap_or(0);
    Mock::given(method("GET"))
        .and(path(format!("/datasets/{TEST_DATASET}/documents")))
        .and(query_param("keyword", keyword))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": entries,
            "has_more": false,
            "total": total,
            "page": 1,
            "limit": 20
        })))
        .mount(server)
        .await;
}

/// Mounts the create-by-file endpoint with a success response.
///
/// `expected_calls` is verified when the mock server shuts down.
pub async fn mount_create(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(format!("/datasets/{TEST_DATASET}/document/create-by-file")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document": {
                "id": "doc-new-001",
                "name": "uploaded",
                "indexing_status": "waiting"
            },
            "batch": "batch-001"
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Mounts the update-by-file endpoint for a specific document ID.
///
/// `expected_calls` is verified when the mock server shuts down.
pub async fn mount_update(server: &MockServer, document_id: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(format!(
            "/datasets/{TEST_DATASET}/documents/{document_id}/update-by-file"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document": {
                "id": document_id,
                "name": "uploaded",
                "indexing_status": "waiting"
            },
            "batch": "batch-002"
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}
