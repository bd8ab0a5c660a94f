//! Built-in document extractors.
//!
//! One extractor per [`FormatTag`] that can be handled. Selection is a plain
//! match on the tag; there is no registry and no mutable state, so extractors
//! are shared `'static` values and safe to call from any thread.

use crate::error::{DoctextError, Result};
use crate::types::FormatTag;
use std::panic::{AssertUnwindSafe, catch_unwind};

pub mod docx;
pub mod legacy;
pub mod pdf;
pub mod text;

pub use docx::DocxExtractor;
pub use legacy::{LEGACY_DOC_MESSAGE, LegacyDocExtractor};
pub use pdf::PdfExtractor;
pub use text::PlainTextExtractor;

/// Format-specific extractor: raw bytes in, text out.
///
/// Implementations may return empty or whitespace-only text; deciding that
/// this means "no extractable text" is left to the pipeline.
pub trait DocumentExtractor: Send + Sync {
    /// Unique, lowercase, hyphenated name (e.g. `"pdf-extractor"`).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// The format this extractor handles.
    fn format(&self) -> FormatTag;

    /// Extract text from the complete document bytes.
    fn extract(&self, content: &[u8]) -> Result<String>;
}

static PDF_EXTRACTOR: PdfExtractor = PdfExtractor;
static DOCX_EXTRACTOR: DocxExtractor = DocxExtractor;
static PLAIN_TEXT_EXTRACTOR: PlainTextExtractor = PlainTextExtractor;
static LEGACY_DOC_EXTRACTOR: LegacyDocExtractor = LegacyDocExtractor;

/// Extractor for a resolved format; `None` for [`FormatTag::Unknown`].
pub fn extractor_for(format: FormatTag) -> Option<&'static dyn DocumentExtractor> {
    match format {
        FormatTag::Pdf => Some(&PDF_EXTRACTOR),
        FormatTag::Docx => Some(&DOCX_EXTRACTOR),
        FormatTag::PlainText => Some(&PLAIN_TEXT_EXTRACTOR),
        FormatTag::LegacyDoc => Some(&LEGACY_DOC_EXTRACTOR),
        FormatTag::Unknown => None,
    }
}

/// Formats that yield text (legacy `.doc` is recognized but never extracted).
pub fn supported_formats() -> [FormatTag; 3] {
    [FormatTag::Pdf, FormatTag::Docx, FormatTag::PlainText]
}

/// Run an extractor, turning a panic inside the parsing libraries into `MalformedDocument`.
pub fn run_extractor(extractor: &dyn DocumentExtractor, content: &[u8]) -> Result<String> {
    match catch_unwind(AssertUnwindSafe(|| extractor.extract(content))) {
        Ok(result) => result,
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());

            tracing::warn!(extractor = extractor.name(), %detail, "Extractor panicked");

            Err(DoctextError::malformed(format!(
                "{} failed while parsing the document: {}",
                extractor.name(),
                detail
            )))
        }
    }
}
