//! Qdrant integration for docq
//!
//! Implements the VectorStore trait against a hosted Qdrant cluster. Point
//! identity is derived from the chunk id, which makes ingestion idempotent.

mod ids;
mod store;

pub use ids::point_id_for;
pub use store::{QdrantStore, QdrantStoreConfig};

// Re-export core types for convenience
pub use docq_core::{EmbeddedChunk, Error, Result, ScoredChunk, VectorStore};
