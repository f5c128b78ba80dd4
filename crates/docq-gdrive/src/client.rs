//! Google Drive API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, warn};

use docq_core::{DocumentRef, DocumentSource, Error, Result};

use crate::auth::{fetch_access_token, ServiceAccountKey};
use crate::config::DriveConfig;
use crate::extract::extract_text;
use crate::mime::{classify, FileAction};

const DRIVE_API: &str = "https://www.googleapis.com/drive/v3";
const PAGE_SIZE: u32 = 100;

/// Read-only Drive client over the v3 REST API.
pub struct DriveClient {
    client: Client,
    access_token: String,
    folder_id: String,
}

#[derive(Deserialize)]
struct FileList {
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
    #[serde(default)]
    files: Vec<FileEntry>,
}

#[derive(Deserialize)]
struct FileEntry {
    id: String,
    name: String,
    #[serde(rename = "mimeType", default)]
    mime_type: String,
}

impl DriveClient {
    /// Authenticate with the configured service account and return a ready
    /// client. This is the only place the credentials file is read.
    pub async fn connect(config: &DriveConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        let key = ServiceAccountKey::load(&config.credentials_path).await?;
        let access_token = fetch_access_token(&client, &key).await?;

        Ok(Self {
            client,
            access_token,
            folder_id: config.folder_id.clone(),
        })
    }

    /// One page of a folder listing.
    async fn list_page(&self, folder_id: &str, page_token: Option<&str>) -> Result<FileList> {
        let query = format!("'{}' in parents and trashed = false", folder_id);
        let mut request = self
            .client
            .get(format!("{}/files", DRIVE_API))
            .bearer_auth(&self.access_token)
            .query(&[
                ("q", query.as_str()),
                ("fields", "nextPageToken, files(id, name, mimeType)"),
                ("spaces", "drive"),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ])
            .query(&[("pageSize", PAGE_SIZE)]);

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::DocumentSource(format!(
                "listing folder {} failed with status {}",
                folder_id,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    async fn download(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::DocumentSource(format!(
                "download failed with status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl DocumentSource for DriveClient {
    /// Walk the configured folder breadth-first. A listing failure on one
    /// subfolder is logged and the walk continues, matching the batch
    /// philosophy of ingestion: incomplete beats aborted.
    async fn list_documents(&self) -> Result<Vec<DocumentRef>> {
        let mut documents = Vec::new();
        let mut folders = VecDeque::from([(self.folder_id.clone(), String::new())]);

        while let Some((folder_id, path)) = folders.pop_front() {
            let mut page_token: Option<String> = None;

            loop {
                let page = match self.list_page(&folder_id, page_token.as_deref()).await {
                    Ok(page) => page,
                    Err(e) => {
                        warn!(folder = %folder_id, error = %e, "skipping unlistable folder");
                        break;
                    }
                };

                for entry in page.files {
                    match classify(&entry.mime_type) {
                        FileAction::Folder => {
                            let child_path = if path.is_empty() {
                                entry.name.clone()
                            } else {
                                format!("{}/{}", path, entry.name)
                            };
                            folders.push_back((entry.id, child_path));
                        }
                        FileAction::Download | FileAction::Export(_) => {
                            documents.push(DocumentRef {
                                id: entry.id,
                                name: entry.name,
                                mime_type: entry.mime_type,
                                path: path.clone(),
                            });
                        }
                        FileAction::Skip => {
                            debug!(name = %entry.name, mime = %entry.mime_type, "skipping unsupported file");
                        }
                    }
                }

                page_token = page.next_page_token;
                if page_token.is_none() {
                    break;
                }
            }
        }

        Ok(documents)
    }

    async fn fetch_text(&self, doc: &DocumentRef) -> Result<String> {
        match classify(&doc.mime_type) {
            FileAction::Download => {
                let url = format!("{}/files/{}", DRIVE_API, doc.id);
                let bytes = self
                    .download(&url, &[("alt", "media"), ("supportsAllDrives", "true")])
                    .await?;
                extract_text(&doc.mime_type, &bytes)
            }
            FileAction::Export(export_mime) => {
                let url = format!("{}/files/{}/export", DRIVE_API, doc.id);
                let bytes = self.download(&url, &[("mimeType", export_mime)]).await?;
                extract_text(export_mime, &bytes)
            }
            _ => Err(Error::DocumentSource(format!(
                "unsupported mime type: {}",
                doc.mime_type
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_list_parses_drive_shape() {
        let raw = r#"{
            "nextPageToken": "tok",
            "files": [
                {"id": "f1", "name": "handbook.pdf", "mimeType": "application/pdf"},
                {"id": "d1", "name": "HR", "mimeType": "application/vnd.google-apps.folder"}
            ]
        }"#;

        let list: FileList = serde_json::from_str(raw).unwrap();
        assert_eq!(list.next_page_token.as_deref(), Some("tok"));
        assert_eq!(list.files.len(), 2);
        assert_eq!(list.files[0].mime_type, "application/pdf");
    }

    #[test]
    fn file_list_tolerates_missing_fields() {
        let list: FileList = serde_json::from_str(r#"{"files":[{"id":"x","name":"y"}]}"#).unwrap();
        assert!(list.next_page_token.is_none());
        assert_eq!(list.files[0].mime_type, "");
    }
}
