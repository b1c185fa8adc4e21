//! Domain error types
//!
//! This module defines error types specific to domain operations,
//! mainly validation failures when constructing identifiers and names.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid dataset identifier
    #[error("Invalid dataset ID: {0}")]
    InvalidDatasetId(String),

    /// Invalid document identifier
    #[error("Invalid document ID: {0}")]
    InvalidDocumentId(String),

    /// Invalid document name
    #[error("Invalid document name: {0}")]
    InvalidDocumentName(String),

    /// Path has no usable basename (empty, `..`, or non-UTF-8)
    #[error("Path has no usable file name: {0}")]
    InvalidPath(String),
}
