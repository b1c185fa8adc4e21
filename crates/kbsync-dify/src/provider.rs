//! DifyKnowledgeStore - IKnowledgeStore implementation for the Dify API
//!
//! Wraps the [`DifyClient`] and delegates to the [`crate::documents`]
//! module to fulfil the [`IKnowledgeStore`] port contract.
//!
//! ## Design Notes
//!
//! - The store owns its client; the client is bound to one dataset, so one
//!   store serves exactly one sync target.
//! - No retry logic lives here: the sync policy is one attempt per
//!   operation, with the error (including the remote response body) handed
//!   back to the engine for logging.

use anyhow::Result;

use kbsync_core::domain::newtypes::{DocumentId, DocumentName};
use kbsync_core::ports::knowledge_store::{IKnowledgeStore, RemoteDocument};

use crate::client::DifyClient;
use crate::documents;

/// Adapter that bridges the [`IKnowledgeStore`] port to the Dify dataset API
pub struct DifyKnowledgeStore {
    client: DifyClient,
}

impl DifyKnowledgeStore {
    /// Creates a new store over the given client
    pub fn new(client: DifyClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl IKnowledgeStore for DifyKnowledgeStore {
    async fn search_documents(&self, keyword: &str) -> Result<Vec<RemoteDocument>> {
        documents::list_documents(&self.client, keyword).await
    }

    async fn create_document(&self, name: &DocumentName, content: Vec<u8>) -> Result<()> {
        documents::create_by_file(&self.client, name, content).await
    }

    async fn update_document(
        &self,
        id: &DocumentId,
        name: &DocumentName,
        content: Vec<u8>,
    ) -> Result<()> {
        documents::update_by_file(&self.client, id, name, content).await
    }
}
