//! Batch ingestion pipeline
//!
//! Runs as an explicit, separately triggered job, never during chat
//! serving. One failing document is logged, counted, and skipped; the run
//! carries on so the index ends incomplete rather than stale.

use std::sync::Arc;
use tracing::{info, warn};

use docq_core::{
    DocumentRef, DocumentSource, EmbeddedChunk, EmbeddingProvider, IngestReport, Result,
    VectorStore,
};

use crate::chunker::Chunker;

/// Chunks embedded per provider call during ingestion.
const EMBED_BATCH: usize = 32;

pub struct Ingestor<S: DocumentSource, E: EmbeddingProvider, V: VectorStore> {
    source: Arc<S>,
    embedding: Arc<E>,
    store: Arc<V>,
    chunker: Chunker,
}

impl<S: DocumentSource, E: EmbeddingProvider, V: VectorStore> Ingestor<S, E, V> {
    pub fn new(source: Arc<S>, embedding: Arc<E>, store: Arc<V>) -> Self {
        Self {
            source,
            embedding,
            store,
            chunker: Chunker::default(),
        }
    }

    pub fn with_chunker(mut self, chunker: Chunker) -> Self {
        self.chunker = chunker;
        self
    }

    /// Ingest the whole corpus. Fails outright only when the source cannot
    /// be listed or the store cannot be prepared; per-document problems are
    /// recorded in the report.
    pub async fn run(&self) -> Result<IngestReport> {
        self.store.ensure_ready().await?;

        let documents = self.source.list_documents().await?;
        info!(total = documents.len(), "starting ingestion run");

        let mut report = IngestReport::default();
        for doc in &documents {
            match self.ingest_document(doc).await {
                Ok(0) => {
                    report.documents_skipped += 1;
                    info!(doc = %doc.name, "document had no usable text, skipped");
                }
                Ok(chunks) => {
                    report.documents_indexed += 1;
                    report.chunks_upserted += chunks;
                }
                Err(e) => {
                    report.documents_failed += 1;
                    report.errors.push(format!("{}: {}", doc.name, e));
                    warn!(doc = %doc.name, error = %e, "document failed, skipping");
                }
            }
        }

        info!(
            indexed = report.documents_indexed,
            failed = report.documents_failed,
            chunks = report.chunks_upserted,
            "ingestion run finished"
        );
        Ok(report)
    }

    /// Ingest one document: fetch, chunk, embed, replace its stored chunks.
    /// Returns the number of chunks upserted.
    async fn ingest_document(&self, doc: &DocumentRef) -> Result<usize> {
        let text = self.source.fetch_text(doc).await?;
        let chunks = self.chunker.chunk(doc, &text);
        if chunks.is_empty() {
            return Ok(0);
        }

        let mut embedded = Vec::with_capacity(chunks.len());
        for batch in chunks.chunks(EMBED_BATCH) {
            let texts: Vec<String> = batch.iter().map(|c| c.text.clone()).collect();
            let vectors = self.embedding.embed(&texts).await?;
            for (chunk, vector) in batch.iter().zip(vectors) {
                embedded.push(EmbeddedChunk {
                    chunk: chunk.clone(),
                    vector,
                });
            }
        }

        // Drop the document's previous chunks first: chunk ids overwrite on
        // upsert, but a shrunken document would otherwise leave orphans.
        self.store.delete_document(&doc.id).await?;
        self.store.upsert_chunks(&embedded).await?;

        Ok(embedded.len())
    }
}
