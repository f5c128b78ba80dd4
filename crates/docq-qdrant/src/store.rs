//! Qdrant-backed vector store implementation

use async_trait::async_trait;
use qdrant_client::qdrant::value::Kind;
use qdrant_client::qdrant::{
    Condition, CountPointsBuilder, CreateCollectionBuilder, DeletePointsBuilder, Distance, Filter,
    PointStruct, ScoredPoint, SearchPointsBuilder, UpsertPointsBuilder, Value,
    VectorParamsBuilder,
};
use qdrant_client::{Payload, Qdrant};
use serde_json::json;
use std::collections::HashMap;

use docq_core::{EmbeddedChunk, Error, Result, ScoredChunk, VectorStore};

use crate::ids::point_id_for;

#[derive(Debug, Clone)]
pub struct QdrantStoreConfig {
    pub url: String,
    pub api_key: String,
    pub collection: String,
    /// Must match the embedding provider's dimension.
    pub dimension: usize,
}

/// Vector store backed by a Qdrant collection with cosine distance.
pub struct QdrantStore {
    client: Qdrant,
    config: QdrantStoreConfig,
}

impl QdrantStore {
    pub fn new(config: QdrantStoreConfig) -> Result<Self> {
        let client = Qdrant::from_url(&config.url)
            .api_key(config.api_key.clone())
            .build()
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn payload_for(chunk: &EmbeddedChunk) -> Result<Payload> {
        Payload::try_from(json!({
            "chunk_id": chunk.chunk.id,
            "doc_id": chunk.chunk.doc_id,
            "doc_name": chunk.chunk.doc_name,
            "doc_path": chunk.chunk.doc_path,
            "chunk_index": chunk.chunk.index as i64,
            "text": chunk.chunk.text,
        }))
        .map_err(|e| Error::Serialization(e.to_string()))
    }

    fn scored_chunk_from(point: ScoredPoint) -> ScoredChunk {
        let payload = point.payload;
        ScoredChunk {
            chunk_id: payload_str(&payload, "chunk_id"),
            doc_id: payload_str(&payload, "doc_id"),
            doc_name: payload_str(&payload, "doc_name"),
            doc_path: payload_str(&payload, "doc_path"),
            text: payload_str(&payload, "text"),
            score: point.score,
        }
    }
}

fn payload_str(payload: &HashMap<String, Value>, key: &str) -> String {
    match payload.get(key).and_then(|v| v.kind.as_ref()) {
        Some(Kind::StringValue(s)) => s.clone(),
        _ => String::new(),
    }
}

#[async_trait]
impl VectorStore for QdrantStore {
    async fn ensure_ready(&self) -> Result<()> {
        let exists = self
            .client
            .collection_exists(&self.config.collection)
            .await
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        if !exists {
            self.client
                .create_collection(
                    CreateCollectionBuilder::new(&self.config.collection).vectors_config(
                        VectorParamsBuilder::new(self.config.dimension as u64, Distance::Cosine),
                    ),
                )
                .await
                .map_err(|e| Error::VectorStore(e.to_string()))?;
        }

        Ok(())
    }

    async fn upsert_chunks(&self, chunks: &[EmbeddedChunk]) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }

        let mut points = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            points.push(PointStruct::new(
                point_id_for(&chunk.chunk.id),
                chunk.vector.clone(),
                Self::payload_for(chunk)?,
            ));
        }

        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.config.collection, points).wait(true))
            .await
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        Ok(())
    }

    async fn delete_document(&self, doc_id: &str) -> Result<()> {
        self.client
            .delete_points(
                DeletePointsBuilder::new(&self.config.collection)
                    .points(Filter::must([Condition::matches(
                        "doc_id",
                        doc_id.to_string(),
                    )]))
                    .wait(true),
            )
            .await
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        Ok(())
    }

    async fn search(&self, vector: &[f32], top_k: usize) -> Result<Vec<ScoredChunk>> {
        let response = self
            .client
            .search_points(
                SearchPointsBuilder::new(&self.config.collection, vector.to_vec(), top_k as u64)
                    .with_payload(true),
            )
            .await
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        Ok(response
            .result
            .into_iter()
            .map(Self::scored_chunk_from)
            .collect())
    }

    async fn count(&self) -> Result<usize> {
        let response = self
            .client
            .count(CountPointsBuilder::new(&self.config.collection).exact(true))
            .await
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        Ok(response.result.map(|r| r.count as usize).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docq_core::Chunk;

    fn embedded(doc: &str, index: usize, text: &str) -> EmbeddedChunk {
        EmbeddedChunk {
            chunk: Chunk {
                id: Chunk::chunk_id(doc, index),
                doc_id: doc.to_string(),
                doc_name: format!("{}.txt", doc),
                doc_path: "handbook".to_string(),
                index,
                text: text.to_string(),
                start: 0,
                end: text.len(),
            },
            vector: vec![0.0; 4],
        }
    }

    #[test]
    fn payload_carries_provenance() {
        let payload = QdrantStore::payload_for(&embedded("doc-1", 2, "office hours")).unwrap();
        let map: HashMap<String, Value> = payload.into();

        assert_eq!(payload_str(&map, "chunk_id"), "doc-1:2");
        assert_eq!(payload_str(&map, "doc_id"), "doc-1");
        assert_eq!(payload_str(&map, "doc_name"), "doc-1.txt");
        assert_eq!(payload_str(&map, "doc_path"), "handbook");
        assert_eq!(payload_str(&map, "text"), "office hours");
    }

    #[test]
    fn missing_payload_fields_become_empty_strings() {
        let map = HashMap::new();
        assert_eq!(payload_str(&map, "doc_name"), "");
    }

    #[test]
    fn scored_point_maps_to_scored_chunk() {
        let payload: HashMap<String, Value> = Payload::try_from(json!({
            "chunk_id": "doc-1:0",
            "doc_id": "doc-1",
            "doc_name": "doc-1.txt",
            "doc_path": "",
            "text": "hello",
        }))
        .unwrap()
        .into();

        let point = ScoredPoint {
            payload,
            score: 0.87,
            ..Default::default()
        };

        let chunk = QdrantStore::scored_chunk_from(point);
        assert_eq!(chunk.chunk_id, "doc-1:0");
        assert_eq!(chunk.text, "hello");
        assert!((chunk.score - 0.87).abs() < f32::EPSILON);
    }
}
