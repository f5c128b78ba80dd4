//! OpenRouter chat-completion client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use docq_core::{ChatMessage, ChatPrompt, Error, LlmProvider, Result};

use crate::config::OpenRouterConfig;

/// OpenRouter client
pub struct OpenRouterClient {
    config: OpenRouterConfig,
    client: Client,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

impl OpenRouterClient {
    /// Model constants
    pub const GEMINI_2_0_FLASH: &'static str = "google/gemini-2.0-flash-001";

    pub fn new(config: OpenRouterConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn extract_answer(mut response: CompletionResponse) -> Result<String> {
        let choice = if response.choices.is_empty() {
            return Err(Error::InvalidResponse("completion had no choices".to_string()));
        } else {
            response.choices.remove(0)
        };

        match choice.message.content {
            Some(content) if !content.trim().is_empty() => Ok(content.trim().to_string()),
            _ => Err(Error::InvalidResponse(
                "completion message content was empty".to_string(),
            )),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenRouterClient {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String> {
        let request_body = CompletionRequest {
            model: &self.config.model,
            messages: prompt.to_messages(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let url = format!("{}/chat/completions", self.config.api_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Llm(format!(
                "OpenRouter request failed with status {}: {}",
                status, error_text
            )));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        Self::extract_answer(parsed)
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}
