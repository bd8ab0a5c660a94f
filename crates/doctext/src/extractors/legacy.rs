//! Legacy Word (.doc) handling.
//!
//! Compound-file `.doc` documents need an external office converter, which this
//! crate does not ship. They are recognized so callers get a precise error.

use crate::extractors::DocumentExtractor;
use crate::types::FormatTag;
use crate::{DoctextError, Result};

pub const LEGACY_DOC_MESSAGE: &str =
    "Legacy .doc files are not supported. Please convert the document to .docx or .pdf.";

/// Rejects every input with `UnsupportedFormat`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyDocExtractor;

impl DocumentExtractor for LegacyDocExtractor {
    fn name(&self) -> &'static str {
        "legacy-doc-extractor"
    }

    fn description(&self) -> &'static str {
        "Rejects legacy Word documents with conversion instructions"
    }

    fn format(&self) -> FormatTag {
        FormatTag::LegacyDoc
    }

    fn extract(&self, _content: &[u8]) -> Result<String> {
        Err(DoctextError::UnsupportedFormat(LEGACY_DOC_MESSAGE.to_string()))
    }
}
