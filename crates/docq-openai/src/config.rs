//! OpenAI embeddings configuration

use serde::{Deserialize, Serialize};

use docq_core::Settings;

/// Configuration for the embeddings client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub dimension: usize,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, dimension: usize) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: "https://api.openai.com/v1".to_string(),
            model: model.into(),
            dimension,
        }
    }

    /// Build from validated process settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.openai_api_key.clone(),
            settings.embedding_model.clone(),
            settings.embedding_dimension,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_yaml_snapshot;

    #[test]
    fn config_snapshot() {
        let config = OpenAiConfig::new("test_key_redacted", "text-embedding-3-small", 1536);

        assert_yaml_snapshot!(config, @r###"
        ---
        api_key: test_key_redacted
        api_url: "https://api.openai.com/v1"
        model: text-embedding-3-small
        dimension: 1536
        "###);
    }

    #[test]
    fn from_settings_carries_model_and_dimension() {
        let settings = Settings::new("or", "oa_key", "http://q", "qk", "col", "Acme");
        let config = OpenAiConfig::from_settings(&settings);
        assert_eq!(config.api_key, "oa_key");
        assert_eq!(config.model, "text-embedding-3-small");
        assert_eq!(config.dimension, 1536);
    }
}
