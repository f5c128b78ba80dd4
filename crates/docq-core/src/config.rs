//! Process configuration loaded from environment variables
//!
//! All required settings are checked once at startup. Missing or empty
//! values are collected and reported together so the operator fixes the
//! whole `.env` in one pass instead of one variable per run.

use serde::{Deserialize, Serialize};
use std::env;

use crate::{Error, Result};

/// Default embedding model; ingestion and querying must use the same one,
/// otherwise vectors from the two paths are not comparable.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 1536;
pub const DEFAULT_LLM_MODEL: &str = "google/gemini-2.0-flash-001";
pub const DEFAULT_TOP_K: usize = 8;
pub const DEFAULT_MEMORY_MAX_TURNS: usize = 6;

/// Settings required to serve chat. Drive credentials are checked
/// separately by the ingest command; they are not needed at chat time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub openrouter_api_key: String,
    pub openai_api_key: String,
    pub qdrant_url: String,
    pub qdrant_api_key: String,
    pub qdrant_collection: String,
    pub company_name: String,
    pub embedding_model: String,
    pub embedding_dimension: usize,
    pub llm_model: String,
    pub retrieval_top_k: usize,
    pub memory_max_turns: usize,
    /// JSONL transcript log; logging is disabled when unset.
    pub chat_log_path: Option<String>,
}

impl Settings {
    /// Load settings from the environment, reading `.env` first when present.
    ///
    /// Fails with a single configuration error naming every missing
    /// required variable. No external call is made before this succeeds.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from an arbitrary key lookup. `from_env` is the only
    /// production caller; tests feed maps in directly.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut require = |name: &str| match get(name) {
            Some(value) => value,
            None => {
                missing.push(name.to_string());
                String::new()
            }
        };

        let openrouter_api_key = require("OPENROUTER_API_KEY");
        let openai_api_key = require("OPENAI_API_KEY");
        let qdrant_url = require("QDRANT_URL");
        let qdrant_api_key = require("QDRANT_API_KEY");
        let qdrant_collection = require("QDRANT_COLLECTION");
        let company_name = require("COMPANY_NAME");

        if !missing.is_empty() {
            return Err(Error::Configuration(format!(
                "missing required settings: {}",
                missing.join(", ")
            )));
        }

        let parse_or = |name: &str, default: usize| -> Result<usize> {
            match get(name) {
                Some(raw) => raw.parse().map_err(|_| {
                    Error::Configuration(format!("{} is not a valid number: {}", name, raw))
                }),
                None => Ok(default),
            }
        };

        Ok(Self {
            openrouter_api_key,
            openai_api_key,
            qdrant_url,
            qdrant_api_key,
            qdrant_collection,
            company_name,
            embedding_model: get("EMBEDDING_MODEL")
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
            embedding_dimension: parse_or("EMBEDDING_DIMENSION", DEFAULT_EMBEDDING_DIMENSION)?,
            llm_model: get("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            retrieval_top_k: parse_or("RETRIEVAL_TOP_K", DEFAULT_TOP_K)?,
            memory_max_turns: parse_or("MEMORY_MAX_TURNS", DEFAULT_MEMORY_MAX_TURNS)?,
            chat_log_path: get("CHAT_LOG_PATH"),
        })
    }

    /// Build settings directly, with defaults for everything tunable.
    /// Used by tests and by callers that manage secrets themselves.
    pub fn new(
        openrouter_api_key: impl Into<String>,
        openai_api_key: impl Into<String>,
        qdrant_url: impl Into<String>,
        qdrant_api_key: impl Into<String>,
        qdrant_collection: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            openrouter_api_key: openrouter_api_key.into(),
            openai_api_key: openai_api_key.into(),
            qdrant_url: qdrant_url.into(),
            qdrant_api_key: qdrant_api_key.into(),
            qdrant_collection: qdrant_collection.into(),
            company_name: company_name.into(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_dimension: DEFAULT_EMBEDDING_DIMENSION,
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            retrieval_top_k: DEFAULT_TOP_K,
            memory_max_turns: DEFAULT_MEMORY_MAX_TURNS,
            chat_log_path: None,
        }
    }
}
