//! Integration tests for the document operations
//!
//! Verifies request shapes (auth header, pagination, multipart fields) and
//! response/error handling against a wiremock-based Dify mock server.

use kbsync_core::domain::newtypes::{DocumentId, DocumentName};
use kbsync_dify::documents;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

// ============================================================================
// Search tests
// ============================================================================

#[tokio::test]
async fn test_list_documents_parses_entries() {
    let (server, client) = common::setup_dify_mock().await;

    common::mount_search(
        &server,
        "setup.md",
        serde_json::json!([
            {"id": "doc-1", "name": "setup.md", "indexing_status": "completed"},
            {"id": "doc-2", "name": "setup.md.old", "indexing_status": "completed"}
        ]),
    )
    .await;

    let documents = documents::list_documents(&client, "setup.md")
        .await
        .expect("Search failed");

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].id.as_str(), "doc-1");
    assert_eq!(documents[0].name, "setup.md");
    assert_eq!(documents[1].name, "setup.md.old");
}

#[tokio::test]
async fn test_list_documents_sends_auth_and_fixed_pagination() {
    let server = MockServer::start().await;

    // The mock only matches when the bearer header and the fixed
    // page/limit parameters are present; a mismatch yields 404 and the
    // call below fails.
    Mock::given(method("GET"))
        .and(path(format!(
            "/datasets/{}/documents",
            common::TEST_DATASET
        )))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(query_param("keyword", "a.md"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = kbsync_dify::client::DifyClient::with_base_url(
        common::TEST_API_KEY,
        kbsync_core::domain::newtypes::DatasetId::new(common::TEST_DATASET).unwrap(),
        server.uri(),
    );

    let documents = documents::list_documents(&client, "a.md")
        .await
        .expect("Search failed");
    assert!(documents.is_empty());
}

#[tokio::test]
async fn test_list_documents_error_carries_response_body() {
    let (server, client) = common::setup_dify_mock().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/datasets/{}/documents",
            common::TEST_DATASET
        )))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "code": "dataset_not_accessible",
            "message": "The dataset is not accessible with this API key"
        })))
        .mount(&server)
        .await;

    let err = documents::list_documents(&client, "a.md")
        .await
        .expect_err("Expected search to fail");

    let message = format!("{err:#}");
    assert!(message.contains("403"));
    assert!(message.contains("dataset_not_accessible"));
}

// ============================================================================
// Create tests
// ============================================================================

#[tokio::test]
async fn test_create_by_file_sends_multipart_config_and_content() {
    let (server, client) = common::setup_dify_mock().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/datasets/{}/document/create-by-file",
            common::TEST_DATASET
        )))
        .and(header("Authorization", "Bearer test-api-key"))
        // The multipart body carries the processing configuration JSON,
        // the declared filename and the raw file content as text.
        .and(body_string_contains("high_quality"))
        .and(body_string_contains("\"mode\":\"automatic\""))
        .and(body_string_contains("filename=\"notes.md\""))
        .and(body_string_contains("# Release notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document": {"id": "doc-9", "name": "notes.md"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let name = DocumentName::new("notes.md").unwrap();
    documents::create_by_file(&client, &name, b"# Release notes".to_vec())
        .await
        .expect("Create failed");
}

#[tokio::test]
async fn test_create_by_file_error_carries_response_body() {
    let (server, client) = common::setup_dify_mock().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/datasets/{}/document/create-by-file",
            common::TEST_DATASET
        )))
        .respond_with(ResponseTemplate::new(413).set_body_json(serde_json::json!({
            "code": "file_too_large",
            "message": "Uploaded file exceeds the size limit"
        })))
        .mount(&server)
        .await;

    let name = DocumentName::new("big.md").unwrap();
    let err = documents::create_by_file(&client, &name, vec![0u8; 16])
        .await
        .expect_err("Expected create to fail");

    let message = format!("{err:#}");
    assert!(message.contains("413"));
    assert!(message.contains("file_too_large"));
}

// ============================================================================
// Update tests
// ============================================================================

#[tokio::test]
async fn test_update_by_file_targets_document_and_sends_name() {
    let (server, client) = common::setup_dify_mock().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/datasets/{}/documents/doc-42/update-by-file",
            common::TEST_DATASET
        )))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(body_string_contains("\"name\":\"guide.md\""))
        .and(body_string_contains("\"mode\":\"automatic\""))
        .and(body_string_contains("# Updated guide"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document": {"id": "doc-42", "name": "guide.md"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = DocumentId::new("doc-42").unwrap();
    let name = DocumentName::new("guide.md").unwrap();
    documents::update_by_file(&client, &id, &name, b"# Updated guide".to_vec())
        .await
        .expect("Update failed");
}

#[tokio::test]
async fn test_update_by_file_error_carries_response_body() {
    let (server, client) = common::setup_dify_mock().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/datasets/{}/documents/doc-gone/update-by-file",
            common::TEST_DATASET
        )))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": "document_not_found",
            "message": "Document does not exist"
        })))
        .mount(&server)
        .await;

    let id = DocumentId::new("doc-gone").unwrap();
    let name = DocumentName::new("a.md").unwrap();
    let err = documents::update_by_file(&client, &id, &name, b"x".to_vec())
        .await
        .expect_err("Expected update to fail");

    let message = format!("{err:#}");
    assert!(message.contains("404"));
    assert!(message.contains("document_not_found"));
}
