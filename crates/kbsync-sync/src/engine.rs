//! Document synchronization engine
//!
//! The [`SyncEngine`] pushes a CI-provided list of changed documentation
//! files into the remote knowledge base. For each file it resolves the
//! remote document by exact name match and either updates the match in
//! place or creates a new document.
//!
//! ## Sync Flow
//!
//! 1. **Resolve**: keyword-search the dataset for the file's basename and
//!    scan the results for a case-sensitive exact name match
//! 2. **Push**: update the matched document, or create one if none matched
//! 3. **Bookkeeping**: record an explicit per-file outcome and continue
//!
//! Entries are processed strictly in order, one file at a time; no failure
//! crosses a per-file boundary. A failed search is collapsed into
//! "document not found" and falls back to create, so a transient search
//! failure can produce a duplicate remote document — the warning log is the
//! only trace of that case.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use kbsync_core::domain::newtypes::{DocumentId, DocumentName};
use kbsync_core::ports::knowledge_store::IKnowledgeStore;
use kbsync_core::ports::local_filesystem::ILocalFileSystem;

// ============================================================================
// FileOutcome
// ============================================================================

/// Per-file result of a sync pass
///
/// Every non-empty entry of the changed-file list produces exactly one
/// outcome; failures are carried here instead of being propagated, so the
/// engine can always continue with the next entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// A new remote document was created for the file
    Created {
        /// The changed-file entry, as listed
        path: String,
    },
    /// An existing remote document was updated in place
    Updated {
        /// The changed-file entry, as listed
        path: String,
        /// ID of the document that was updated
        id: DocumentId,
    },
    /// The path no longer exists locally; nothing was sent
    SkippedMissing {
        /// The changed-file entry, as listed
        path: String,
    },
    /// The file could not be pushed
    Failed {
        /// The changed-file entry, as listed
        path: String,
        /// Human-readable failure reason (already logged)
        reason: String,
    },
}

// ============================================================================
// SyncReport
// ============================================================================

/// Summary of a completed sync pass
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Per-file outcomes in processing order
    pub outcomes: Vec<FileOutcome>,
    /// Number of documents created
    pub created: u32,
    /// Number of documents updated
    pub updated: u32,
    /// Number of entries skipped because the file no longer exists
    pub skipped: u32,
    /// Error descriptions for failed entries (non-fatal)
    pub errors: Vec<String>,
    /// Wall-clock duration of the pass in milliseconds
    pub duration_ms: u64,
}

impl SyncReport {
    /// Number of entries that resulted in a push (create or update)
    pub fn pushed(&self) -> u32 {
        self.created + self.updated
    }
}

// ============================================================================
// SyncEngine
// ============================================================================

/// Sequential create-or-update engine over the knowledge store port
///
/// Holds no state between passes: document existence is looked up fresh on
/// every run, so the remote search response is the only source of truth.
pub struct SyncEngine {
    store: Arc<dyn IKnowledgeStore>,
    filesystem: Arc<dyn ILocalFileSystem>,
}

impl SyncEngine {
    /// Creates a new SyncEngine with the required adapters
    ///
    /// # Arguments
    /// * `store` - Remote knowledge-base operations
    /// * `filesystem` - Local filesystem reads for changed files
    pub fn new(store: Arc<dyn IKnowledgeStore>, filesystem: Arc<dyn ILocalFileSystem>) -> Self {
        Self { store, filesystem }
    }

    /// Processes every entry of the changed-file list, in order
    ///
    /// Entries are whitespace-trimmed; empty entries (e.g. from a trailing
    /// delimiter in the source variable) are skipped silently. One file is
    /// fully processed — search, then create-or-update — before the next
    /// begins.
    ///
    /// This method is infallible by design: per-file failures become
    /// [`FileOutcome::Failed`] entries in the report.
    pub async fn sync(&self, changed_files: &[String]) -> SyncReport {
        let start = Instant::now();
        let mut report = SyncReport::default();

        info!(entries = changed_files.len(), "Processing changed files");

        for raw_entry in changed_files {
            let entry = raw_entry.trim();
            if entry.is_empty() {
                continue;
            }

            let outcome = self.sync_one(entry).await;
            match &outcome {
                FileOutcome::Created { .. } => report.created += 1,
                FileOutcome::Updated { .. } => report.updated += 1,
                FileOutcome::SkippedMissing { .. } => report.skipped += 1,
                FileOutcome::Failed { path, reason } => {
                    report.errors.push(format!("{path}: {reason}"));
                }
            }
            report.outcomes.push(outcome);
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        report
    }

    /// Pushes a single changed file, converting every failure into an outcome
    async fn sync_one(&self, path_str: &str) -> FileOutcome {
        let path = Path::new(path_str);

        if !self.filesystem.exists(path).await {
            info!(path = path_str, "File not found (might have been deleted)");
            return FileOutcome::SkippedMissing {
                path: path_str.to_string(),
            };
        }

        info!(path = path_str, "Processing file");

        let name = match DocumentName::from_path(path) {
            Ok(name) => name,
            Err(err) => return self.fail(path_str, err.to_string()),
        };

        let content = match self.filesystem.read_file(path).await {
            Ok(content) => content,
            Err(err) => return self.fail(path_str, format!("Failed to read file: {err:#}")),
        };

        match self.resolve_document_id(&name).await {
            Some(id) => match self.store.update_document(&id, &name, content).await {
                Ok(()) => {
                    debug!(path = path_str, id = %id, "Document updated");
                    FileOutcome::Updated {
                        path: path_str.to_string(),
                        id,
                    }
                }
                Err(err) => self.fail(path_str, format!("Failed to update document: {err:#}")),
            },
            None => match self.store.create_document(&name, content).await {
                Ok(()) => {
                    debug!(path = path_str, "Document created");
                    FileOutcome::Created {
                        path: path_str.to_string(),
                    }
                }
                Err(err) => self.fail(path_str, format!("Failed to create document: {err:#}")),
            },
        }
    }

    /// Resolves a document name to its remote ID via keyword search
    ///
    /// Scans the first result page for entries whose name exactly equals
    /// `name` (case-sensitive, byte-for-byte) and returns the first match.
    /// Search failures are logged and collapsed into `None`, so the caller
    /// falls back to creating a new document.
    async fn resolve_document_id(&self, name: &DocumentName) -> Option<DocumentId> {
        match self.store.search_documents(name.as_str()).await {
            Ok(documents) => documents
                .into_iter()
                .find(|doc| doc.name == name.as_str())
                .map(|doc| doc.id),
            Err(err) => {
                let chain = format!("{err:#}");
                warn!(
                    name = %name,
                    error = %chain,
                    "Document search failed, treating as not found"
                );
                None
            }
        }
    }

    /// Logs a per-file failure and wraps it into an outcome
    fn fail(&self, path: &str, reason: String) -> FileOutcome {
        error!(path, %reason, "File sync failed");
        FileOutcome::Failed {
            path: path.to_string(),
            reason,
        }
    }
}
