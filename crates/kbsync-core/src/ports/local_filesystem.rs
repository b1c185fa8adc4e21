//! Local filesystem port (driven/secondary port)
//!
//! This module defines the interface for the local filesystem reads the
//! sync engine needs: existence checks and whole-file reads. Changed files
//! are small documentation sources, so content is read fully into memory
//! and handed to the single request that consumes it.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because filesystem errors are adapter-specific.
//! - `exists` returns a plain bool: a missing path is an expected case in
//!   CI (the file may have been deleted in the same change set), not an
//!   error.

use std::path::Path;

/// Port trait for local filesystem operations
#[async_trait::async_trait]
pub trait ILocalFileSystem: Send + Sync {
    /// Returns true if the path exists on the local filesystem
    ///
    /// # Arguments
    /// * `path` - Path as provided by the CI change list (usually
    ///   repository-relative)
    async fn exists(&self, path: &Path) -> bool;

    /// Reads the entire contents of a file
    ///
    /// # Arguments
    /// * `path` - Path to the file
    ///
    /// # Errors
    /// Returns an error if the file doesn't exist or cannot be read
    async fn read_file(&self, path: &Path) -> anyhow::Result<Vec<u8>>;
}
