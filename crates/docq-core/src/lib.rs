//! Core traits and types for docq
//!
//! This crate defines the boundary interfaces of the assistant: embedding
//! providers, vector stores, chat-completion providers, and document sources.
//! Concrete clients live in their own crates; everything here is provider
//! agnostic so the pipeline and the chat engine stay testable.

pub mod config;
pub mod embedding;
pub mod error;
pub mod llm;
pub mod memory;
pub mod source;
pub mod types;
pub mod vector_store;

pub use config::Settings;
pub use embedding::EmbeddingProvider;
pub use error::{Error, Result};
pub use llm::{ChatMessage, ChatPrompt, LlmProvider, Role};
pub use memory::ChatMemory;
pub use source::DocumentSource;
pub use types::{
    Chunk, ConversationTurn, DocumentRef, EmbeddedChunk, IngestReport, ScoredChunk,
};
pub use vector_store::VectorStore;
