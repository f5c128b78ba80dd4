//! OpenAI embeddings integration for docq
//!
//! Provides the [`EmbeddingProvider`] implementation used by both the
//! ingestion pipeline and the query path.

mod client;
mod config;

pub use client::OpenAiEmbeddings;
pub use config::OpenAiConfig;

// Re-export core types for convenience
pub use docq_core::{EmbeddingProvider, Error, Result};
