//! Knowledge store port (driven/secondary port)
//!
//! This module defines the interface for the remote knowledge-base service
//! that holds the synced documents. The primary implementation targets the
//! Dify dataset API, but the trait is service-agnostic: it speaks in terms
//! of named documents, not endpoints.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because errors at port boundaries are
//!   adapter-specific and don't need domain-level classification. Adapters
//!   must attach the remote response body to the error chain when one is
//!   available, since per-file error logs are the only diagnostics a CI run
//!   leaves behind.
//! - [`RemoteDocument`] is a port-level DTO. `search_documents` returns the
//!   raw keyword matches; deciding which (if any) corresponds to a local
//!   file is the sync engine's responsibility, not the adapter's.
//! - `create_document`/`update_document` take owned content because the
//!   bytes are consumed by the outgoing request body.

use serde::{Deserialize, Serialize};

use crate::domain::newtypes::{DocumentId, DocumentName};

/// A document record returned by the remote keyword search
///
/// The remote service assigns the `id`; the `name` is whatever the document
/// was uploaded as (for kbsync-managed documents, the local file's basename).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDocument {
    /// Server-assigned opaque identifier
    pub id: DocumentId,
    /// Human-readable document name
    pub name: String,
}

/// Port trait for remote knowledge-base operations
///
/// ## Implementation Notes
///
/// - Implementations must not retry internally: the sync policy is
///   one attempt per operation, with failures reported to the caller.
/// - All methods assume a valid API credential is held by the adapter.
#[async_trait::async_trait]
pub trait IKnowledgeStore: Send + Sync {
    /// Runs a keyword search over the dataset's documents
    ///
    /// # Arguments
    /// * `keyword` - Search keyword (a document name)
    ///
    /// # Returns
    /// The matching documents from the first result page. May include
    /// partial-name matches; callers filter for exact equality.
    async fn search_documents(&self, keyword: &str) -> anyhow::Result<Vec<RemoteDocument>>;

    /// Creates a new document in the dataset from file content
    ///
    /// # Arguments
    /// * `name` - Name the document is stored under
    /// * `content` - Raw file bytes to upload
    async fn create_document(&self, name: &DocumentName, content: Vec<u8>) -> anyhow::Result<()>;

    /// Replaces an existing document's content and name
    ///
    /// # Arguments
    /// * `id` - Server-assigned identifier of the document to update
    /// * `name` - Name the document is stored under after the update
    /// * `content` - Raw file bytes to upload
    async fn update_document(
        &self,
        id: &DocumentId,
        name: &DocumentName,
        content: Vec<u8>,
    ) -> anyhow::Result<()>;
}
