//! Shared data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document as listed by a [`crate::DocumentSource`], before any content
/// has been fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Source-assigned identifier, stable across runs.
    pub id: String,
    pub name: String,
    pub mime_type: String,
    /// Folder path inside the source, `""` at the root.
    pub path: String,
}

/// A bounded span of text cut from one source document. Chunks are the unit
/// of embedding and retrieval, immutable once stored; re-ingesting a
/// document replaces its chunks wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// `{document id}:{chunk index}`: deterministic, so re-ingestion
    /// overwrites instead of duplicating.
    pub id: String,
    pub doc_id: String,
    pub doc_name: String,
    pub doc_path: String,
    pub index: usize,
    pub text: String,
    /// Character span within the extracted document text.
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    pub fn chunk_id(doc_id: &str, index: usize) -> String {
        format!("{}:{}", doc_id, index)
    }
}

/// A chunk paired with its embedding, ready for upsert.
#[derive(Debug, Clone)]
pub struct EmbeddedChunk {
    pub chunk: Chunk,
    pub vector: Vec<f32>,
}

/// One retrieval hit: chunk content plus similarity score. Ephemeral,
/// consumed to build a prompt and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk_id: String,
    pub doc_id: String,
    pub doc_name: String,
    pub doc_path: String,
    pub text: String,
    pub score: f32,
}

/// One completed (question, answer) exchange kept for follow-up context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub question: String,
    pub answer: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Outcome of one ingestion run. Item failures are recorded here and do not
/// abort the batch, so the index ends a run incomplete rather than stale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestReport {
    pub documents_indexed: usize,
    pub documents_failed: usize,
    pub documents_skipped: usize,
    pub chunks_upserted: usize,
    pub errors: Vec<String>,
}

impl IngestReport {
    pub fn merge(&mut self, other: IngestReport) {
        self.documents_indexed += other.documents_indexed;
        self.documents_failed += other.documents_failed;
        self.documents_skipped += other.documents_skipped;
        self.chunks_upserted += other.chunks_upserted;
        self.errors.extend(other.errors);
    }
}
