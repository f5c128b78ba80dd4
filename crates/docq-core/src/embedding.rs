//! Embedding provider trait

use async_trait::async_trait;

use crate::Result;

/// Turns text into fixed-dimension vectors.
///
/// The same provider instance must back both ingestion and querying: vectors
/// from different models do not live in the same space, and similarity
/// between them is meaningless.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of texts. The returned vectors are in input order and
    /// each has exactly [`dimension`](Self::dimension) components.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Identifier of the embedding model in use.
    fn model_id(&self) -> &str;

    /// Dimension of every vector this provider produces.
    fn dimension(&self) -> usize;
}
