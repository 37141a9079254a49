//! PDF text extraction with `lopdf`.

use docquiz_core::{Error, Result};
use lopdf::Document;
use tracing::{debug, warn};

/// Extract raw text per page. A page that fails to decode yields an empty
/// string; only a document that cannot be parsed at all is an error.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>> {
    let doc = Document::load_mem(bytes).map_err(|e| Error::Pdf(e.to_string()))?;

    let pages = doc.get_pages();
    let mut texts = Vec::with_capacity(pages.len());
    for (page_num, _page_id) in pages {
        match doc.extract_text(&[page_num]) {
            Ok(text) => texts.push(text),
            Err(e) => {
                warn!("Failed to extract text from page {}: {}", page_num, e);
                texts.push(String::new());
            }
        }
    }
    debug!("Extracted {} pages", texts.len());
    Ok(texts)
}
