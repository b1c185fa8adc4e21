//! Document operations against the Dify dataset API
//!
//! Provides the three calls kbsync makes:
//! - [`list_documents`] - Keyword search over a dataset's documents
//! - [`create_by_file`] - Create a document from uploaded file content
//! - [`update_by_file`] - Replace an existing document's content and name
//!
//! ## Dify API References
//!
//! - [List documents](https://docs.dify.ai/api-reference/knowledge-base/documents)
//! - [Create/update by file](https://docs.dify.ai/api-reference/knowledge-base/create-a-document-from-a-file)
//!
//! The processing configuration (`indexing_technique`, `process_rule`) is an
//! opaque pass-through controlling how the service chunks and embeds the
//! uploaded content; kbsync always requests high-quality indexing with
//! automatic chunking.

use anyhow::{anyhow, Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use kbsync_core::domain::newtypes::{DocumentId, DocumentName};
use kbsync_core::ports::knowledge_store::RemoteDocument;

use crate::client::DifyClient;

/// Result page requested from the search endpoint. Only the first page is
/// ever fetched; a kbsync-managed name either appears among the first
/// matches or is treated as absent.
const SEARCH_PAGE: u32 = 1;

/// Number of entries requested per search.
const SEARCH_LIMIT: u32 = 20;

/// Indexing technique requested for new documents.
const INDEXING_TECHNIQUE: &str = "high_quality";

/// MIME type declared for uploaded file parts. Changed files are
/// documentation sources, so markdown is declared unconditionally.
const UPLOAD_MIME: &str = "text/markdown";

// ============================================================================
// Dify API response types
// ============================================================================

/// Response from the document-listing endpoint
///
/// The full response carries pagination fields and per-document indexing
/// state; only the entries themselves are of interest here.
#[derive(Debug, Deserialize)]
struct DocumentListResponse {
    /// Documents on the requested page
    #[serde(default)]
    data: Vec<DocumentEntry>,
}

/// A single document entry from the listing response
#[derive(Debug, Deserialize)]
struct DocumentEntry {
    /// Server-assigned document ID
    id: String,
    /// Document name
    name: String,
}

// ============================================================================
// Dify API request payloads
// ============================================================================

/// Chunking/processing rule passed through to the service
#[derive(Debug, Serialize)]
struct ProcessRule {
    mode: &'static str,
}

impl ProcessRule {
    fn automatic() -> Self {
        Self { mode: "automatic" }
    }
}

/// Processing configuration sent in the `data` part of create requests
#[derive(Debug, Serialize)]
struct CreateConfig {
    indexing_technique: &'static str,
    process_rule: ProcessRule,
}

/// Processing configuration sent in the `data` part of update requests
///
/// Update requests carry the target name instead of an indexing technique;
/// the document keeps the technique it was created with.
#[derive(Debug, Serialize)]
struct UpdateConfig<'a> {
    name: &'a str,
    process_rule: ProcessRule,
}

// ============================================================================
// Operations
// ============================================================================

/// Searches the dataset for documents matching `keyword`
///
/// Issues `GET /datasets/{dataset_id}/documents?keyword=...&page=1&limit=20`
/// and returns the entries from the first result page. The service matches
/// keywords loosely, so the result may contain partial-name matches; callers
/// needing exact identity must filter.
///
/// # Errors
/// Returns an error on transport failure, a non-success status (with the
/// response body in the message), or an unparseable response.
pub async fn list_documents(client: &DifyClient, keyword: &str) -> Result<Vec<RemoteDocument>> {
    let path = client.dataset_path("/documents");
    debug!(keyword, "Searching documents");

    let page = SEARCH_PAGE.to_string();
    let limit = SEARCH_LIMIT.to_string();
    let response = client
        .request(Method::GET, &path)
        .query(&[
            ("keyword", keyword),
            ("page", page.as_str()),
            ("limit", limit.as_str()),
        ])
        .send()
        .await
        .context("Failed to send document search request")?;
    let response = success_or_body_error("Document search", response).await?;

    let list: DocumentListResponse = response
        .json()
        .await
        .context("Failed to parse document list response")?;

    let documents = list
        .data
        .into_iter()
        .map(|entry| {
            let id = DocumentId::new(entry.id).context("Document entry has an invalid ID")?;
            Ok(RemoteDocument {
                id,
                name: entry.name,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(keyword, count = documents.len(), "Document search complete");
    Ok(documents)
}

/// Creates a new document in the dataset from file content
///
/// Issues `POST /datasets/{dataset_id}/document/create-by-file` with a
/// multipart body: a `data` part carrying the processing configuration JSON
/// and a `file` part carrying the content under the document name.
///
/// # Errors
/// Returns an error on transport failure or a non-success status (with the
/// response body in the message).
pub async fn create_by_file(
    client: &DifyClient,
    name: &DocumentName,
    content: Vec<u8>,
) -> Result<()> {
    let path = client.dataset_path("/document/create-by-file");
    let config = CreateConfig {
        indexing_technique: INDEXING_TECHNIQUE,
        process_rule: ProcessRule::automatic(),
    };
    let form = upload_form(&config, name, content)?;

    info!(name = %name, "Creating document");
    let response = client
        .request(Method::POST, &path)
        .multipart(form)
        .send()
        .await
        .context("Failed to send document create request")?;
    success_or_body_error("Document create", response).await?;

    info!(name = %name, "Successfully created document");
    Ok(())
}

/// Replaces an existing document's content and name
///
/// Issues `POST /datasets/{dataset_id}/documents/{document_id}/update-by-file`
/// with the same multipart shape as [`create_by_file`], except the `data`
/// part carries the target name and processing mode.
///
/// # Errors
/// Returns an error on transport failure or a non-success status (with the
/// response body in the message).
pub async fn update_by_file(
    client: &DifyClient,
    id: &DocumentId,
    name: &DocumentName,
    content: Vec<u8>,
) -> Result<()> {
    let path = client.dataset_path(&format!("/documents/{}/update-by-file", id.as_str()));
    let config = UpdateConfig {
        name: name.as_str(),
        process_rule: ProcessRule::automatic(),
    };
    let form = upload_form(&config, name, content)?;

    info!(name = %name, id = %id, "Updating document");
    let response = client
        .request(Method::POST, &path)
        .multipart(form)
        .send()
        .await
        .context("Failed to send document update request")?;
    success_or_body_error("Document update", response).await?;

    info!(name = %name, "Successfully updated document");
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Builds the two-part upload form shared by create and update requests
///
/// The content bytes are moved into the `file` part, so nothing holds the
/// data (or any file handle) once the request completes or fails.
fn upload_form<T: Serialize>(config: &T, name: &DocumentName, content: Vec<u8>) -> Result<Form> {
    let data = serde_json::to_string(config).context("Failed to encode processing configuration")?;
    let file_part = Part::bytes(content)
        .file_name(name.as_str().to_string())
        .mime_str(UPLOAD_MIME)
        .context("Invalid upload MIME type")?;
    Ok(Form::new().text("data", data).part("file", file_part))
}

/// Converts a non-success response into an error carrying the response body
///
/// `reqwest`'s `error_for_status` discards the body, but CI logs are the
/// only diagnostics a failed sync leaves behind, so the body text is folded
/// into the error message when it can be read.
async fn success_or_body_error(operation: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable response body>".to_string());
    Err(anyhow!("{operation} failed with status {status}: {body}"))
}
