//! Deterministic point identifiers
//!
//! Qdrant point ids must be integers or UUIDs, while chunk ids are readable
//! `{doc}:{index}` strings. Hashing the chunk id into a UUID keeps the
//! mapping stable across runs: re-ingesting the same chunk overwrites its
//! point instead of creating a new one.

use uuid::Uuid;

/// Map a chunk id to its Qdrant point id.
pub fn point_id_for(chunk_id: &str) -> String {
    let digest = md5::compute(chunk_id.as_bytes());
    Uuid::from_bytes(digest.0).to_string()
}
