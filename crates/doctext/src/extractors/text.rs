//! Plain text extractor.

use crate::Result;
use crate::extraction::text::decode_text;
use crate::extractors::DocumentExtractor;
use crate::types::FormatTag;

/// Plain text extractor.
///
/// Extracts content from plain text files (.txt). Never fails: invalid UTF-8 is
/// replaced rather than rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a new plain text extractor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for PlainTextExtractor {
    fn name(&self) -> &'static str {
        "plain-text-extractor"
    }

    fn description(&self) -> &'static str {
        "Extracts content from plain text files"
    }

    fn format(&self) -> FormatTag {
        FormatTag::PlainText
    }

    fn extract(&self, content: &[u8]) -> Result<String> {
        Ok(decode_text(content))
    }
}
