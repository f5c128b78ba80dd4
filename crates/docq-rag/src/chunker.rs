//! Document chunking
//!
//! Fixed-target character chunks with overlap so context survives chunk
//! boundaries. Chunk ids derive from (document id, chunk index) and are
//! therefore stable across runs over unchanged content.

use docq_core::{Chunk, DocumentRef};

pub const DEFAULT_CHUNK_SIZE: usize = 1024;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// How far back from the target boundary we look for whitespace before
/// giving up and cutting mid-word.
const BREAK_SEARCH_WINDOW: usize = 100;

#[derive(Debug, Clone)]
pub struct Chunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}

impl Chunker {
    /// `chunk_overlap` must be smaller than `chunk_size`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be positive");
        assert!(chunk_overlap < chunk_size, "overlap must be below chunk size");
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Split extracted document text into chunks. Spans are character
    /// offsets into `text`; consecutive chunks overlap by roughly
    /// `chunk_overlap` characters.
    pub fn chunk(&self, doc: &DocumentRef, text: &str) -> Vec<Chunk> {
        let chars: Vec<char> = text.chars().collect();
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let hard_end = (start + self.chunk_size).min(chars.len());
            let end = if hard_end < chars.len() {
                self.break_point(&chars, start, hard_end)
            } else {
                hard_end
            };

            let body: String = chars[start..end].iter().collect();
            let trimmed = body.trim();
            if !trimmed.is_empty() {
                let index = chunks.len();
                chunks.push(Chunk {
                    id: Chunk::chunk_id(&doc.id, index),
                    doc_id: doc.id.clone(),
                    doc_name: doc.name.clone(),
                    doc_path: doc.path.clone(),
                    index,
                    text: trimmed.to_string(),
                    start,
                    end,
                });
            }

            if end >= chars.len() {
                break;
            }

            // Step forward, keeping the overlap but always making progress.
            let next = end.saturating_sub(self.chunk_overlap);
            start = if next > start { next } else { end };
        }

        chunks
    }

    /// Prefer ending a chunk at whitespace close to the target boundary.
    fn break_point(&self, chars: &[char], start: usize, hard_end: usize) -> usize {
        let floor = hard_end
            .saturating_sub(BREAK_SEARCH_WINDOW)
            .max(start + 1);
        for candidate in (floor..hard_end).rev() {
            if chars[candidate].is_whitespace() {
                return candidate + 1;
            }
        }
        hard_end
    }
}
