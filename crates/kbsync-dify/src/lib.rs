//! kbsync Dify - Dify dataset API adapter
//!
//! Provides an async client for the subset of the Dify dataset REST API
//! that document synchronization needs:
//! - Keyword search over a dataset's documents
//! - Document creation from file upload (create-by-file)
//! - Document update from file upload (update-by-file)
//!
//! ## Modules
//!
//! - [`client`] - Authenticated HTTP client bound to a single dataset
//! - [`documents`] - Document search and multipart upload operations
//! - [`provider`] - `IKnowledgeStore` port implementation

pub mod client;
pub mod documents;
pub mod provider;
