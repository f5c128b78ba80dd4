//! Chat-completion provider trait and prompt types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{ConversationTurn, Result};

/// Role of a chat message, mirroring the wire format of the hosted APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// A fully assembled prompt: system instruction, retrieved context folded
/// into the final user message, and the recent conversation turns between.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPrompt {
    pub system: String,
    pub turns: Vec<ConversationTurn>,
    /// Context block plus the question, as one user message.
    pub user: String,
}

impl ChatPrompt {
    /// Flatten into the message list the completion APIs expect.
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.turns.len() * 2 + 2);
        messages.push(ChatMessage::system(&self.system));
        for turn in &self.turns {
            messages.push(ChatMessage::user(&turn.question));
            messages.push(ChatMessage::assistant(&turn.answer));
        }
        messages.push(ChatMessage::user(&self.user));
        messages
    }
}

/// A hosted chat-completion API.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate an answer for the assembled prompt.
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String>;

    /// Identifier of the generation model in use.
    fn model_id(&self) -> &str;
}
