//! Shared test doubles for the pipeline and engine tests

use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

use docq_core::{
    ChatPrompt, DocumentRef, DocumentSource, EmbeddingProvider, Error, LlmProvider, Result,
};

pub const TEST_DIMENSION: usize = 32;

/// Deterministic bag-of-words embedding: identical text always maps to the
/// identical vector, so exact-match retrieval is testable without a model.
pub struct HashEmbedding {
    pub calls: AtomicUsize,
}

impl HashEmbedding {
    pub fn new() -> Self {
        Self { calls: AtomicUsize::new(0) }
    }

    pub fn embed_one(text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; TEST_DIMENSION];
        for word in text.to_lowercase().split_whitespace() {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            vector[(hasher.finish() as usize) % TEST_DIMENSION] += 1.0;
        }

        let magnitude: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for v in &mut vector {
                *v /= magnitude;
            }
        }
        vector
    }
}

#[async_trait]
impl EmbeddingProvider for HashEmbedding {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts.iter().map(|t| Self::embed_one(t)).collect())
    }

    fn model_id(&self) -> &str {
        "test-hash-embedding"
    }

    fn dimension(&self) -> usize {
        TEST_DIMENSION
    }
}

/// In-memory document source with optional per-document failures.
pub struct StaticSource {
    pub documents: Vec<(DocumentRef, String)>,
    pub failing: Vec<String>,
}

impl StaticSource {
    pub fn new(documents: Vec<(&str, &str)>) -> Self {
        Self {
            documents: documents
                .into_iter()
                .map(|(id, text)| {
                    (
                        DocumentRef {
                            id: id.to_string(),
                            name: format!("{}.txt", id),
                            mime_type: "text/plain".to_string(),
                            path: String::new(),
                        },
                        text.to_string(),
                    )
                })
                .collect(),
            failing: Vec::new(),
        }
    }

    pub fn failing_on(mut self, doc_id: &str) -> Self {
        self.failing.push(doc_id.to_string());
        self
    }
}

#[async_trait]
impl DocumentSource for StaticSource {
    async fn list_documents(&self) -> Result<Vec<DocumentRef>> {
        Ok(self.documents.iter().map(|(d, _)| d.clone()).collect())
    }

    async fn fetch_text(&self, doc: &DocumentRef) -> Result<String> {
        if self.failing.contains(&doc.id) {
            return Err(Error::DocumentSource(format!("cannot fetch {}", doc.id)));
        }
        self.documents
            .iter()
            .find(|(d, _)| d.id == doc.id)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| Error::DocumentSource(format!("unknown document {}", doc.id)))
    }
}

/// LLM double that either answers from a canned map or fails every call.
pub struct ScriptedLlm {
    pub answers: HashMap<String, String>,
    pub default_answer: Option<String>,
    pub fail: bool,
}

impl ScriptedLlm {
    pub fn answering(answer: &str) -> Self {
        Self {
            answers: HashMap::new(),
            default_answer: Some(answer.to_string()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            answers: HashMap::new(),
            default_answer: None,
            fail: true,
        }
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlm {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String> {
        if self.fail {
            return Err(Error::Llm("upstream unavailable".to_string()));
        }
        for (needle, answer) in &self.answers {
            if prompt.user.contains(needle) {
                return Ok(answer.clone());
            }
        }
        self.default_answer
            .clone()
            .ok_or_else(|| Error::Llm("no scripted answer".to_string()))
    }

    fn model_id(&self) -> &str {
        "test-scripted-llm"
    }
}
