//! Google Drive integration for docq
//!
//! Read-only document source for the ingestion pipeline: service-account
//! authentication, recursive folder listing, and plain-text extraction for
//! the file formats the corpus contains.

mod auth;
mod client;
mod config;
mod extract;
mod mime;

pub use auth::ServiceAccountKey;
pub use client::DriveClient;
pub use config::DriveConfig;
pub use mime::{classify, FileAction};

// Re-export core types for convenience
pub use docq_core::{DocumentRef, DocumentSource, Error, Result};
