//! Plain-text extraction from downloaded bytes

use docq_core::{Error, Result};

/// Extract text from a downloaded or exported file. `mime_type` is the type
/// of the bytes in hand, i.e. the export target for Google-native files.
pub fn extract_text(mime_type: &str, bytes: &[u8]) -> Result<String> {
    let text = match mime_type {
        "application/pdf" => pdf_text(bytes)?,
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(Error::DocumentSource("no extractable text".to_string()));
    }
    Ok(text)
}

fn pdf_text(bytes: &[u8]) -> Result<String> {
    let doc = lopdf::Document::load_mem(bytes)
        .map_err(|e| Error::DocumentSource(format!("failed to parse pdf: {}", e)))?;

    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    doc.extract_text(&pages)
        .map_err(|e| Error::DocumentSource(format!("failed to extract pdf text: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        let text = extract_text("text/plain", "Office hours: 8-17\n".as_bytes()).unwrap();
        assert_eq!(text, "Office hours: 8-17");
    }

    #[test]
    fn csv_is_treated_as_text() {
        let text = extract_text("text/csv", b"name,role\nkim,ops\n").unwrap();
        assert!(text.contains("kim,ops"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let bytes = [b'h', b'i', 0xFF, b'!'];
        let text = extract_text("text/plain", &bytes).unwrap();
        assert!(text.starts_with("hi"));
    }

    #[test]
    fn whitespace_only_content_is_an_error() {
        let err = extract_text("text/plain", b"   \n\t ").unwrap_err();
        assert!(matches!(err, Error::DocumentSource(_)));
    }

    #[test]
    fn garbage_pdf_is_an_error() {
        let err = extract_text("application/pdf", b"not a pdf").unwrap_err();
        assert!(matches!(err, Error::DocumentSource(_)));
    }
}
