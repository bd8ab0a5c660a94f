//! Value types flowing through the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{DoctextError, ErrorKind};

/// Document format decided by sniffing and hint resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatTag {
    Pdf,
    Docx,
    LegacyDoc,
    PlainText,
    Unknown,
}

impl FormatTag {
    /// Stable lowercase name, used in logs, CLI output and API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::Pdf => "pdf",
            FormatTag::Docx => "docx",
            FormatTag::LegacyDoc => "legacy_doc",
            FormatTag::PlainText => "plain_text",
            FormatTag::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, FormatTag::Unknown)
    }
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable input to one extraction: the bytes plus whatever the source claimed about them.
///
/// `declared_filename` may be a bare file name, a path or a full URL; only its
/// final path component is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    bytes: Vec<u8>,
    declared_filename: Option<String>,
    declared_mime: Option<String>,
}

impl RawDocument {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            declared_filename: None,
            declared_mime: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.declared_filename = Some(filename.into());
        self
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.declared_mime = Some(mime.into());
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn declared_filename(&self) -> Option<&str> {
        self.declared_filename.as_deref()
    }

    pub fn declared_mime(&self) -> Option<&str> {
        self.declared_mime.as_deref()
    }
}

/// Successful extraction: non-empty text plus the format it was read as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub text: String,
    pub format: FormatTag,
}

/// Serializable result shape shared by the CLI and the HTTP layer.
///
/// Exactly one of the two shapes is produced for a call:
/// `{"text": ...}` or `{"error_kind": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractionOutcome {
    Text { text: String },
    Error { error_kind: ErrorKind, message: String },
}

impl ExtractionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionOutcome::Text { .. })
    }
}

impl From<Result<Extraction, DoctextError>> for ExtractionOutcome {
    fn from(result: Result<Extraction, DoctextError>) -> Self {
        match result {
            Ok(extraction) => ExtractionOutcome::Text { text: extraction.text },
            Err(err) => ExtractionOutcome::Error {
                // Io and Validation only arise outside the core; a caller that
                // still routes one here sees it as a failed retrieval.
                error_kind: err.kind().unwrap_or(ErrorKind::FetchFailed),
                message: err.to_string(),
            },
        }
    }
}
