//! RAG engine for docq
//!
//! Everything between the provider clients and the UI: chunking, the
//! ingestion pipeline, retrieval with prompt assembly, and an in-memory
//! vector store used by tests and offline runs.

mod chunker;
mod engine;
mod ingest;
mod prompt;
mod store;

#[cfg(test)]
pub(crate) mod testutil;

pub use chunker::{Chunker, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
pub use engine::RagEngine;
pub use ingest::Ingestor;
pub use prompt::{build_context, build_prompt, system_prompt};
pub use store::InMemoryVectorStore;

// Re-export core types for convenience
pub use docq_core::{
    ChatMemory, Chunk, DocumentRef, EmbeddedChunk, Error, IngestReport, Result, ScoredChunk,
};
