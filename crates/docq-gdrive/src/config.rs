//! Drive source configuration

use std::env;
use std::path::Path;

use docq_core::{Error, Result};

/// Configuration for the Drive source. Only the ingest command needs these
/// variables; chat serving never touches the drive.
#[derive(Debug, Clone)]
pub struct DriveConfig {
    /// Path to the service-account credentials JSON.
    pub credentials_path: String,
    /// Folder whose contents (recursively) form the corpus.
    pub folder_id: String,
}

impl DriveConfig {
    /// Load from environment variables, checking that the credentials file
    /// actually exists before any network call is attempted.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut missing = Vec::new();
        let credentials_path = env::var("GOOGLE_APPLICATION_CREDENTIALS")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                missing.push("GOOGLE_APPLICATION_CREDENTIALS");
                String::new()
            });
        let folder_id = env::var("GOOGLE_DRIVE_FOLDER_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                missing.push("GOOGLE_DRIVE_FOLDER_ID");
                String::new()
            });

        if !missing.is_empty() {
            return Err(Error::Configuration(format!(
                "missing required settings: {}",
                missing.join(", ")
            )));
        }

        if !Path::new(&credentials_path).exists() {
            return Err(Error::Configuration(format!(
                "credentials file not found: {}",
                credentials_path
            )));
        }

        Ok(Self {
            credentials_path,
            folder_id,
        })
    }
}
