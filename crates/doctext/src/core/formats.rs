//! Final format decision.
//!
//! Precedence, highest first:
//!
//! 1. the sniffed signature, unless `Unknown`
//! 2. the extension of the declared file name
//! 3. the declared MIME type
//!
//! Byte-level evidence wins because declared names and types come from the
//! remote server. Hints only break ties when sniffing is inconclusive (plain text
//! has no signature).

use crate::core::mime::{format_from_filename, format_from_mime};
use crate::core::sniff::sniff;
use crate::types::{FormatTag, RawDocument};

/// Which signal produced the final decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatEvidence {
    Signature,
    Extension,
    MimeType,
    None,
}

impl FormatEvidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatEvidence::Signature => "signature",
            FormatEvidence::Extension => "extension",
            FormatEvidence::MimeType => "mime_type",
            FormatEvidence::None => "none",
        }
    }
}

/// Resolve a format and report which signal decided it.
pub fn resolve_with_evidence(
    bytes: &[u8],
    declared_filename: Option<&str>,
    declared_mime: Option<&str>,
) -> (FormatTag, FormatEvidence) {
    let sniffed = sniff(bytes);
    if sniffed.is_known() {
        return (sniffed, FormatEvidence::Signature);
    }

    if let Some(format) = declared_filename.and_then(format_from_filename) {
        return (format, FormatEvidence::Extension);
    }

    if let Some(format) = declared_mime.and_then(format_from_mime) {
        return (format, FormatEvidence::MimeType);
    }

    (FormatTag::Unknown, FormatEvidence::None)
}

/// Resolve the format of a buffer. Never fails; `Unknown` at worst.
pub fn resolve(bytes: &[u8], declared_filename: Option<&str>, declared_mime: Option<&str>) -> FormatTag {
    resolve_with_evidence(bytes, declared_filename, declared_mime).0
}

/// [`resolve`] for a [`RawDocument`].
pub fn resolve_document(document: &RawDocument) -> FormatTag {
    resolve(
        document.bytes(),
        document.declared_filename(),
        document.declared_mime(),
    )
}
