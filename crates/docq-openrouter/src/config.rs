//! OpenRouter configuration

use serde::{Deserialize, Serialize};

use docq_core::Settings;

/// Configuration for the chat-completion client. Generation parameters stay
/// low-temperature: answers should track the retrieved context, not improvise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl OpenRouterConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: "https://openrouter.ai/api/v1".to_string(),
            model: model.into(),
            temperature: 0.1,
            max_tokens: 4096,
        }
    }

    /// Build from validated process settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.openrouter_api_key.clone(), settings.llm_model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_yaml_snapshot;

    #[test]
    fn config_snapshot() {
        let config = OpenRouterConfig::new("test_key_redacted", "google/gemini-2.0-flash-001");

        assert_yaml_snapshot!(config, @r###"
        ---
        api_key: test_key_redacted
        api_url: "https://openrouter.ai/api/v1"
        model: google/gemini-2.0-flash-001
        temperature: 0.1
        max_tokens: 4096
        "###);
    }
}
