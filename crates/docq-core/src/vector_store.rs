//! Vector store trait

use async_trait::async_trait;

use crate::{EmbeddedChunk, Result, ScoredChunk};

/// Interface to the external vector database.
///
/// The store owns the only durable copy of the index; the application keeps
/// nothing beyond what it upserts here.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Make sure the backing collection exists and matches the configured
    /// embedding dimension. Called once before the first upsert or search.
    async fn ensure_ready(&self) -> Result<()>;

    /// Insert or overwrite chunks. Point identity derives from the chunk id,
    /// so upserting the same chunk twice never duplicates it.
    async fn upsert_chunks(&self, chunks: &[EmbeddedChunk]) -> Result<()>;

    /// Remove every chunk belonging to a document. Run before re-ingesting
    /// it so a shrunken document leaves no stale chunks behind.
    async fn delete_document(&self, doc_id: &str) -> Result<()>;

    /// Return the `top_k` chunks most similar to the query vector, ordered
    /// by descending score.
    async fn search(&self, vector: &[f32], top_k: usize) -> Result<Vec<ScoredChunk>>;

    /// Total number of stored chunks.
    async fn count(&self) -> Result<usize>;
}
