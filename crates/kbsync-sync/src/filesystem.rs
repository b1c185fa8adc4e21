//! Local filesystem adapter (secondary/driven adapter)
//!
//! Implements [`ILocalFileSystem`] using `tokio::fs` for async file
//! operations. Paths come straight from the CI change list and are used
//! as-is, relative to the working directory of the job.

use std::path::Path;

use kbsync_core::ports::local_filesystem::ILocalFileSystem;
use tracing::{debug, instrument};

/// Adapter that bridges the [`ILocalFileSystem`] port to the real filesystem.
///
/// Zero-sized: all operations derive their context from the path arguments.
#[derive(Debug, Clone, Default)]
pub struct LocalFileSystemAdapter;

impl LocalFileSystemAdapter {
    /// Create a new `LocalFileSystemAdapter`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ILocalFileSystem for LocalFileSystemAdapter {
    #[instrument(skip(self), fields(path = %path.display()))]
    async fn exists(&self, path: &Path) -> bool {
        // A broken symlink or permission error counts as absent: either way
        // there is nothing uploadable at the path.
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    async fn read_file(&self, path: &Path) -> anyhow::Result<Vec<u8>> {
        debug!("reading file");
        let data = tokio::fs::read(path).await?;
        debug!(bytes = data.len(), "file read complete");
        Ok(data)
    }
}
