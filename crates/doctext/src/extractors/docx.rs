//! DOCX extractor.
//!
//! Supports: Microsoft Word (.docx)

use crate::Result;
use crate::extraction::docx::extract_docx_content;
use crate::extractors::DocumentExtractor;
use crate::types::FormatTag;

/// DOCX extractor using native Rust XML parsing.
///
/// Emits body paragraphs first, then table cells, one line per non-blank unit.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for DocxExtractor {
    fn name(&self) -> &'static str {
        "docx-extractor"
    }

    fn description(&self) -> &'static str {
        "Extracts paragraph and table-cell text from Word documents"
    }

    fn format(&self) -> FormatTag {
        FormatTag::Docx
    }

    fn extract(&self, content: &[u8]) -> Result<String> {
        let content = extract_docx_content(content)?;
        tracing::debug!(
            paragraphs = content.paragraphs.len(),
            cells = content.cells.len(),
            "Collected DOCX text units"
        );
        Ok(content.into_text())
    }
}
