//! Dify dataset API client
//!
//! Provides a typed HTTP client for interacting with the Dify dataset API.
//! Handles the bearer authentication header and endpoint construction; the
//! actual document operations live in [`crate::documents`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kbsync_core::domain::newtypes::DatasetId;
//! use kbsync_dify::client::DifyClient;
//! use kbsync_dify::documents;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let dataset = DatasetId::new("my-dataset")?;
//! let client = DifyClient::new("api-key-here", dataset);
//! let docs = documents::list_documents(&client, "setup.md").await?;
//! println!("{} matches", docs.len());
//! # Ok(())
//! # }
//! ```

use kbsync_core::config::DEFAULT_API_BASE;
use kbsync_core::domain::newtypes::DatasetId;
use reqwest::{Client, Method, RequestBuilder};

/// HTTP client for Dify dataset API calls
///
/// Wraps `reqwest::Client` with the bearer authentication header and base
/// URL construction. Each client is bound to a single dataset; every
/// endpoint kbsync calls is scoped under `/datasets/{dataset_id}`.
pub struct DifyClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for API requests
    base_url: String,
    /// API key used as the bearer token
    api_key: String,
    /// Dataset every request operates on
    dataset_id: DatasetId,
}

impl DifyClient {
    /// Creates a new DifyClient against the public Dify API
    ///
    /// # Arguments
    /// * `api_key` - A dataset-scoped Dify API key
    /// * `dataset_id` - The dataset to operate on
    pub fn new(api_key: impl Into<String>, dataset_id: DatasetId) -> Self {
        Self::with_base_url(api_key, dataset_id, DEFAULT_API_BASE)
    }

    /// Creates a new DifyClient with a custom base URL
    ///
    /// Used when `DIFY_API_BASE` points at a self-hosted instance, and by
    /// tests targeting a mock server. A trailing slash on the base URL is
    /// tolerated.
    pub fn with_base_url(
        api_key: impl Into<String>,
        dataset_id: DatasetId,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            api_key: api_key.into(),
            dataset_id,
        }
    }

    /// Returns the dataset this client is bound to
    pub fn dataset_id(&self) -> &DatasetId {
        &self.dataset_id
    }

    /// Returns the base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates an authenticated request builder for the given method and path
    ///
    /// Automatically prepends the base URL and adds the Authorization header.
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, etc.)
    /// * `path` - API path relative to base URL (e.g., "/datasets/abc/documents")
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url).bearer_auth(&self.api_key)
    }

    /// Builds a path under this client's dataset
    ///
    /// # Arguments
    /// * `suffix` - Path below `/datasets/{dataset_id}`, starting with `/`
    pub fn dataset_path(&self, suffix: &str) -> String {
        format!("/datasets/{}{}", self.dataset_id.as_str(), suffix)
    }
}
