//! kbsync Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Configuration** - `SyncConfig` built once from the CI environment
//! - **Domain newtypes** - `DatasetId`, `DocumentId`, `DocumentName`
//! - **Port definitions** - Traits for adapters: `IKnowledgeStore`, `ILocalFileSystem`
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure business logic with no external dependencies.
//! Ports define trait interfaces that adapter crates implement; the sync
//! engine orchestrates them without knowing about HTTP or the real filesystem.

pub mod config;
pub mod domain;
pub mod ports;
