//! Error types shared across the docq crates

use thiserror::Error;

/// Errors produced anywhere in the assistant.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("malformed response: {0}")]
    InvalidResponse(String),

    #[error("embedding request failed: {0}")]
    Embedding(String),

    #[error("vector store error: {0}")]
    VectorStore(String),

    #[error("chat completion failed: {0}")]
    Llm(String),

    #[error("document source error: {0}")]
    DocumentSource(String),

    #[error("question is empty")]
    EmptyQuestion,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error should abort the process rather than be shown to
    /// the user. Only startup configuration problems qualify.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// A short message suitable for rendering in the chat transcript.
    pub fn user_message(&self) -> String {
        match self {
            Error::EmptyQuestion => "Please enter a question.".to_string(),
            other => format!("Something went wrong: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_fatal() {
        assert!(Error::Configuration("missing key".into()).is_fatal());
        assert!(!Error::Llm("upstream 500".into()).is_fatal());
        assert!(!Error::EmptyQuestion.is_fatal());
    }

    #[test]
    fn user_message_is_readable() {
        let msg = Error::VectorStore("collection not found".into()).user_message();
        assert!(msg.contains("collection not found"));
        assert_eq!(Error::EmptyQuestion.user_message(), "Please enter a question.");
    }
}
