//! Integration tests for kbsync-dify
//!
//! Uses wiremock to simulate the Dify dataset API and verifies
//! end-to-end behavior of the document operations and of the sync
//! engine driving them over HTTP.

mod common;

mod test_documents;
