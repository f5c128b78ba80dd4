//! MIME-type handling tables
//!
//! Mirrors what the corpus actually contains: text-like files are
//! downloaded as-is, Google-native documents are exported to plain text or
//! CSV, and binary media is skipped without a download.

pub const FOLDER_MIME: &str = "application/vnd.google-apps.folder";

/// What to do with one listed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    /// Recurse into it.
    Folder,
    /// Download via `alt=media` and extract with the file's own MIME type.
    Download,
    /// Export a Google-native document to the given MIME type.
    Export(&'static str),
    /// Not ingestible; never downloaded.
    Skip,
}

/// Directly downloadable types we can extract text from.
const DOWNLOAD_TYPES: &[&str] = &[
    "application/pdf",
    "text/plain",
    "text/csv",
    "text/markdown",
    "text/html",
];

/// Google-native types and their export targets. Plain text exports give
/// cleaner extraction than PDF ones.
const EXPORT_TYPES: &[(&str, &str)] = &[
    ("application/vnd.google-apps.document", "text/plain"),
    ("application/vnd.google-apps.spreadsheet", "text/csv"),
    ("application/vnd.google-apps.presentation", "text/plain"),
];

pub fn classify(mime_type: &str) -> FileAction {
    if mime_type == FOLDER_MIME {
        return FileAction::Folder;
    }
    if DOWNLOAD_TYPES.contains(&mime_type) {
        return FileAction::Download;
    }
    if let Some((_, export)) = EXPORT_TYPES.iter().find(|(m, _)| *m == mime_type) {
        return FileAction::Export(export);
    }
    FileAction::Skip
}
