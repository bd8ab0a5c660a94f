//! PDF document extractor.

use crate::Result;
use crate::extraction::pdf::extract_pdf_text;
use crate::extractors::DocumentExtractor;
use crate::types::FormatTag;

/// PDF extractor backed by lopdf.
///
/// Page texts are joined by single newlines; an image-only page yields an empty
/// line rather than an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf-extractor"
    }

    fn description(&self) -> &'static str {
        "Extracts the text layer of each PDF page in page order"
    }

    fn format(&self) -> FormatTag {
        FormatTag::Pdf
    }

    fn extract(&self, content: &[u8]) -> Result<String> {
        extract_pdf_text(content)
    }
}
