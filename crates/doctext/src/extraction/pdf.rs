//! PDF text extraction using lopdf.
//!
//! Pages are visited in page-tree order and each contributes exactly one
//! segment. A page whose text layer is empty or cannot be decoded contributes an
//! empty segment instead of failing the document, so segment `n` always belongs
//! to page `n`.

use crate::error::Result;
use lopdf::Document;

/// Extract the text layer of every page, in order.
///
/// # Errors
///
/// `MalformedDocument` if the buffer cannot be loaded as a PDF.
pub fn extract_pdf_pages(bytes: &[u8]) -> Result<Vec<String>> {
    let document = Document::load_mem(bytes)?;
    // A buffer without a document catalog has no page tree to walk.
    document.catalog()?;
    let pages = document.get_pages();

    tracing::debug!(page_count = pages.len(), "Loaded PDF page tree");

    let mut segments = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        let segment = match document.extract_text(&[*page_number]) {
            Ok(text) => normalize_page_text(&text),
            Err(e) => {
                tracing::warn!(page = *page_number, error = %e, "Page text layer unreadable; emitting empty segment");
                String::new()
            }
        };

        if segment.is_empty() {
            tracing::debug!(page = *page_number, "Page has no extractable text");
        }
        segments.push(segment);
    }

    Ok(segments)
}

/// Extract all page text joined by single newlines.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    Ok(extract_pdf_pages(bytes)?.join("\n"))
}

/// lopdf terminates each text object with a newline; drop the trailing ones so
/// the page separator is the only newline between pages.
fn normalize_page_text(text: &str) -> String {
    text.trim_end().to_string()
}
