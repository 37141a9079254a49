//! Document ingestion pipeline: PDF bytes → cleaned text → hashed document.

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::normalize::clean_extracted;
use crate::pdf;
use docquiz_core::Result;

/// Text extracted from one uploaded PDF.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    pub text: String,
    pub page_count: usize,
    /// Pages that produced no text (scanned images, decode failures).
    pub empty_pages: usize,
    /// SHA-256 of the cleaned text.
    pub content_hash: String,
}

impl ExtractedDocument {
    /// True when nothing but whitespace was extracted.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Extract and clean the text of an in-memory PDF.
pub fn ingest_pdf(bytes: &[u8]) -> Result<ExtractedDocument> {
    let pages = pdf::extract_pages(bytes)?;
    let page_count = pages.len();
    let empty_pages = pages.iter().filter(|p| p.trim().is_empty()).count();
    let text = clean_extracted(&pages.join("\n\n"));
    let content_hash = content_hash(&text);

    if empty_pages > 0 {
        debug!("{} of {} pages had no text", empty_pages, page_count);
    }
    info!(
        "Ingested PDF: {} pages, {} chars, hash {}",
        page_count,
        text.len(),
        &content_hash[..12]
    );

    Ok(ExtractedDocument {
        text,
        page_count,
        empty_pages,
        content_hash,
    })
}

/// Compute SHA-256 content hash.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::pdf_with_pages;

    #[test]
    fn test_ingest_counts_pages() {
        let bytes = pdf_with_pages(&[&["Rust is fast."], &[], &["Rust is safe."]]);
        let doc = ingest_pdf(&bytes).unwrap();
        assert_eq!(doc.page_count, 3);
        assert_eq!(doc.empty_pages, 1);
        assert!(!doc.is_empty());
        assert_eq!(doc.content_hash, content_hash(&doc.text));
    }

    #[test]
    fn test_pages_joined_and_cleaned() {
        let bytes = pdf_with_pages(&[
            &["Paris is the capital of France."],
            &["The Louvre is a famous museum."],
        ]);
        let doc = ingest_pdf(&bytes).unwrap();
        assert!(doc.text.contains("capital of France"));
        assert!(doc.text.contains("famous museum"));
        assert!(!doc.text.contains("\n\n\n"));
        assert!(!doc.text.contains("  "));
    }

    #[test]
    fn test_invalid_pdf_is_pdf_error() {
        let err = ingest_pdf(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, docquiz_core::Error::Pdf(_)));
    }

    #[test]
    fn test_blank_pdf_is_empty() {
        let doc = ingest_pdf(&pdf_with_pages(&[&[]])).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.empty_pages, 1);
    }

    #[test]
    fn test_content_hash_stable() {
        assert_eq!(content_hash("abc"), content_hash("abc"));
        assert_ne!(content_hash("abc"), content_hash("abd"));
        assert_eq!(content_hash("").len(), 64);
    }
}
