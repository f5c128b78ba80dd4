//! In-memory vector store
//!
//! Cosine-similarity search over a process-local map. Backs the unit tests
//! and offline smoke runs; production uses the Qdrant implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use docq_core::{EmbeddedChunk, Error, Result, ScoredChunk, VectorStore};

#[derive(Default)]
pub struct InMemoryVectorStore {
    chunks: RwLock<HashMap<String, EmbeddedChunk>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot / (norm_a * norm_b)
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn ensure_ready(&self) -> Result<()> {
        Ok(())
    }

    async fn upsert_chunks(&self, chunks: &[EmbeddedChunk]) -> Result<()> {
        let mut stored = self
            .chunks
            .write()
            .map_err(|e| Error::VectorStore(format!("lock poisoned: {}", e)))?;
        for chunk in chunks {
            stored.insert(chunk.chunk.id.clone(), chunk.clone());
        }
        Ok(())
    }

    async fn delete_document(&self, doc_id: &str) -> Result<()> {
        let mut stored = self
            .chunks
            .write()
            .map_err(|e| Error::VectorStore(format!("lock poisoned: {}", e)))?;
        stored.retain(|_, c| c.chunk.doc_id != doc_id);
        Ok(())
    }

    async fn search(&self, vector: &[f32], top_k: usize) -> Result<Vec<ScoredChunk>> {
        let stored = self
            .chunks
            .read()
            .map_err(|e| Error::VectorStore(format!("lock poisoned: {}", e)))?;

        let mut results: Vec<ScoredChunk> = stored
            .values()
            .map(|c| ScoredChunk {
                chunk_id: c.chunk.id.clone(),
                doc_id: c.chunk.doc_id.clone(),
                doc_name: c.chunk.doc_name.clone(),
                doc_path: c.chunk.doc_path.clone(),
                text: c.chunk.text.clone(),
                score: Self::cosine_similarity(vector, &c.vector),
            })
            .collect();

        // Map iteration order is arbitrary; pin it before the stable
        // score sort so results are reproducible.
        results.sort_by(|a, b| a.chunk_id.cmp(&b.chunk_id));
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(top_k);

        Ok(results)
    }

    async fn count(&self) -> Result<usize> {
        let stored = self
            .chunks
            .read()
            .map_err(|e| Error::VectorStore(format!("lock poisoned: {}", e)))?;
        Ok(stored.len())
    }
}
