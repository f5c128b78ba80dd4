//! OpenRouter integration for docq
//!
//! This crate provides the OpenRouter implementation of the LlmProvider
//! trait used for answer generation.

mod client;
mod config;

pub use client::OpenRouterClient;
pub use config::OpenRouterConfig;

// Re-export core types for convenience
pub use docq_core::{ChatMessage, ChatPrompt, Error, LlmProvider, Result, Role};
