//! Document source trait

use async_trait::async_trait;

use crate::{DocumentRef, Result};

/// Read-only access to the corpus being ingested, e.g. a cloud drive folder.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// List every ingestible document, folders walked recursively. Documents
    /// with unsupported formats are filtered out here, not downloaded.
    async fn list_documents(&self) -> Result<Vec<DocumentRef>>;

    /// Fetch one document and extract its plain text.
    async fn fetch_text(&self, doc: &DocumentRef) -> Result<String>;
}
