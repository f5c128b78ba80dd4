//! Session transcript logging
//!
//! Appends one JSON line per exchange to a local file when a log path is
//! configured. Logging is best-effort: a write failure is reported through
//! tracing and never blocks the answer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::warn;
use uuid::Uuid;

use docq_core::Result;

/// One logged exchange.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub session_id: String,
    pub question: String,
    pub answer: String,
    pub response_ms: u64,
}

pub struct SessionLogger {
    path: Option<String>,
    session_id: String,
}

impl SessionLogger {
    /// `path: None` disables logging entirely.
    pub fn new(path: Option<String>) -> Self {
        let session_id = Uuid::new_v4().to_string()[..8].to_string();
        Self { path, session_id }
    }

    pub fn enabled(&self) -> bool {
        self.path.is_some()
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Append one exchange. Failures are swallowed after a warning.
    pub async fn log(&self, question: &str, answer: &str, response_ms: u64) {
        let Some(path) = &self.path else { return };

        let entry = LogEntry {
            timestamp: Utc::now(),
            session_id: self.session_id.clone(),
            question: question.to_string(),
            answer: answer.to_string(),
            response_ms,
        };

        if let Err(e) = self.append(path, &entry).await {
            warn!(error = %e, "failed to write chat log entry");
        }
    }

    async fn append(&self, path: &str, entry: &LogEntry) -> Result<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| docq_core::Error::Serialization(e.to_string()))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        Ok(())
    }
}
