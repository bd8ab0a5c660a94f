//! Extraction pipeline orchestration.
//!
//! One synchronous pass per document:
//!
//! 1. `Fetched` - bytes and declared hints are in hand
//! 2. `FormatResolved` - sniffing and hint resolution picked a [`FormatTag`]
//! 3. `Extracted` - the format's extractor produced non-blank text
//!
//! Any failure ends the run in `Failed`. Each call is independent and the
//! pipeline holds no state, so running it twice on the same input gives the
//! same outcome.

use crate::core::formats::resolve_with_evidence;
use crate::error::{DoctextError, Result};
use crate::extractors::{extractor_for, run_extractor};
use crate::types::{Extraction, ExtractionOutcome, FormatTag, RawDocument};

/// Lifecycle of a single extraction run, reported through `tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Fetched,
    FormatResolved,
    Extracted,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Fetched => "fetched",
            PipelineStage::FormatResolved => "format_resolved",
            PipelineStage::Extracted => "extracted",
            PipelineStage::Failed => "failed",
        }
    }
}

/// Extract text from raw bytes plus optional declared file name and MIME type.
///
/// # Errors
///
/// - `UnrecognizedFormat` when no signature, extension or MIME type identifies the bytes
/// - `UnsupportedFormat` for legacy `.doc` documents
/// - `MalformedDocument` when the selected extractor cannot parse the bytes
/// - `NoExtractableText` when parsing succeeds but yields only whitespace
///
/// Text that is not blank is returned as the extractor produced it, so leading
/// indentation and empty PDF page segments survive.
///
/// # Example
///
/// ```rust
/// use doctext::{FormatTag, extract};
///
/// let extraction = extract(b"Hello, world!\n", Some("hello.txt"), None)?;
/// assert_eq!(extraction.text, "Hello, world!");
/// assert_eq!(extraction.format, FormatTag::PlainText);
/// # Ok::<(), doctext::DoctextError>(())
/// ```
pub fn extract(bytes: &[u8], declared_filename: Option<&str>, declared_mime: Option<&str>) -> Result<Extraction> {
    tracing::debug!(
        stage = PipelineStage::Fetched.as_str(),
        size = bytes.len(),
        filename = declared_filename,
        mime = declared_mime,
        "Starting extraction"
    );

    let result = run(bytes, declared_filename, declared_mime);

    if let Err(ref err) = result {
        tracing::debug!(stage = PipelineStage::Failed.as_str(), error_type = err.type_name(), error = %err, "Extraction failed");
    }

    result
}

/// Extract text from a [`RawDocument`].
pub fn extract_document(document: &RawDocument) -> Result<Extraction> {
    extract(document.bytes(), document.declared_filename(), document.declared_mime())
}

/// Like [`extract_document`], but folded into the serializable success-or-error shape.
pub fn extract_outcome(document: &RawDocument) -> ExtractionOutcome {
    ExtractionOutcome::from(extract_document(document))
}

fn run(bytes: &[u8], declared_filename: Option<&str>, declared_mime: Option<&str>) -> Result<Extraction> {
    let (format, evidence) = resolve_with_evidence(bytes, declared_filename, declared_mime);

    tracing::debug!(
        stage = PipelineStage::FormatResolved.as_str(),
        format = format.as_str(),
        evidence = evidence.as_str(),
        "Resolved document format"
    );

    let extractor = extractor_for(format).ok_or_else(|| {
        DoctextError::UnrecognizedFormat(
            "no known signature, file extension or MIME type identifies this document".to_string(),
        )
    })?;

    let text = run_extractor(extractor, bytes)?;

    if text.trim().is_empty() {
        return Err(DoctextError::NoExtractableText {
            format: format.as_str().to_string(),
        });
    }

    tracing::debug!(
        stage = PipelineStage::Extracted.as_str(),
        format = format.as_str(),
        extractor = extractor.name(),
        chars = text.chars().count(),
        "Extraction complete"
    );

    Ok(Extraction { text, format })
}

/// Format a document would be read as, without extracting it.
pub fn detect_format(document: &RawDocument) -> FormatTag {
    crate::core::formats::resolve_document(document)
}
