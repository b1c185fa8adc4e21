//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the domain core
//! depends on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`IKnowledgeStore`] - Remote knowledge-base dataset operations (Dify)
//! - [`ILocalFileSystem`] - Local filesystem reads for changed files

pub mod knowledge_store;
pub mod local_filesystem;

pub use knowledge_store::{IKnowledgeStore, RemoteDocument};
pub use local_filesystem::ILocalFileSystem;
