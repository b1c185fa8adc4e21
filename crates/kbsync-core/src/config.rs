//! Configuration module for kbsync.
//!
//! kbsync runs inside a CI job with no arguments; every input arrives
//! through environment variables. Configuration is read exactly once at
//! startup into an immutable [`SyncConfig`] and passed by parameter from
//! the composition root downward — nothing reads the environment after
//! construction.

use thiserror::Error;

use crate::domain::newtypes::DatasetId;

/// Default base URL of the Dify REST API.
pub const DEFAULT_API_BASE: &str = "https://api.dify.ai/v1";

/// Environment variable holding the API key (bearer token).
pub const ENV_API_KEY: &str = "DIFY_API_KEY";
/// Environment variable holding the target dataset ID.
pub const ENV_DATASET_ID: &str = "DIFY_DATASET_ID";
/// Environment variable overriding the API base URL.
pub const ENV_API_BASE: &str = "DIFY_API_BASE";
/// Environment variable holding the comma-separated changed-file list.
pub const ENV_CHANGED_FILES: &str = "CHANGED_FILES";

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors raised while building a [`SyncConfig`] from the environment
///
/// Any of these aborts the run before a single HTTP request is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API key variable is unset or blank
    #[error("environment variable DIFY_API_KEY must be set")]
    MissingApiKey,

    /// The dataset ID variable is unset or blank
    #[error("environment variable DIFY_DATASET_ID must be set")]
    MissingDatasetId,

    /// The dataset ID variable is set but malformed
    #[error("environment variable DIFY_DATASET_ID is invalid: {0}")]
    InvalidDatasetId(String),
}

// ---------------------------------------------------------------------------
// SyncConfig
// ---------------------------------------------------------------------------

/// Process-wide configuration, immutable after construction.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Bearer token for the knowledge-base API.
    pub api_key: String,
    /// Target dataset in the knowledge base.
    pub dataset_id: DatasetId,
    /// Root URL of the REST API.
    pub api_base: String,
    /// Changed file paths in CI order. Entries are kept exactly as split
    /// from the delimited variable — empty or whitespace-padded entries are
    /// preserved here and skipped by the sync engine.
    pub changed_files: Vec<String>,
}

impl SyncConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var(ENV_API_KEY).ok(),
            std::env::var(ENV_DATASET_ID).ok(),
            std::env::var(ENV_API_BASE).ok(),
            std::env::var(ENV_CHANGED_FILES).ok(),
        )
    }

    /// Build the configuration from explicit variable values.
    ///
    /// `from_env` is a thin wrapper over this; keeping the parsing pure
    /// makes it testable without mutating process state. A set-but-blank
    /// variable is treated the same as an unset one.
    pub fn from_vars(
        api_key: Option<String>,
        dataset_id: Option<String>,
        api_base: Option<String>,
        changed_files: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(ConfigError::MissingApiKey),
        };

        let dataset_id = match dataset_id {
            Some(id) if !id.trim().is_empty() => DatasetId::new(id)
                .map_err(|e| ConfigError::InvalidDatasetId(e.to_string()))?,
            _ => return Err(ConfigError::MissingDatasetId),
        };

        let api_base = match api_base {
            Some(base) if !base.trim().is_empty() => base,
            _ => DEFAULT_API_BASE.to_string(),
        };

        let changed_files = changed_files
            .map(|list| list.split(',').map(str::to_string).collect())
            .unwrap_or_default();

        Ok(Self {
            api_key,
            dataset_id,
            api_base,
            changed_files,
        })
    }
}
