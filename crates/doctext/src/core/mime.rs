//! Extension and MIME type hints.
//!
//! These tables turn what a server *claims* about a document into a
//! [`FormatTag`]. They are only consulted when sniffing is inconclusive.

use crate::types::FormatTag;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const PLAIN_TEXT_MIME_TYPE: &str = "text/plain";
pub const DOCX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const LEGACY_WORD_MIME_TYPE: &str = "application/msword";

/// Extension (with leading dot, lowercase) to format.
static EXT_TO_FORMAT: Lazy<HashMap<&'static str, FormatTag>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(".pdf", FormatTag::Pdf);
    m.insert(".docx", FormatTag::Docx);
    m.insert(".doc", FormatTag::LegacyDoc);
    m.insert(".txt", FormatTag::PlainText);

    m
});

/// Bare MIME type (no parameters, lowercase) to format.
static MIME_TO_FORMAT: Lazy<HashMap<&'static str, FormatTag>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(PDF_MIME_TYPE, FormatTag::Pdf);
    m.insert(DOCX_MIME_TYPE, FormatTag::Docx);
    m.insert(LEGACY_WORD_MIME_TYPE, FormatTag::LegacyDoc);
    m.insert(PLAIN_TEXT_MIME_TYPE, FormatTag::PlainText);

    m
});

/// Derive the lowercase final extension (including the dot) from a declared name.
///
/// The name may be a URL: query string and fragment are dropped and only the
/// last path component is used. Names whose only dot is leading (`.bashrc`)
/// have no extension.
pub fn extension_of(declared: &str) -> Option<String> {
    let path = declared.split(['?', '#']).next().unwrap_or_default();
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or_default();

    let stem = file_name.trim_start_matches('.');
    let dot = stem.rfind('.')?;

    let ext = &stem[dot..];
    if ext.len() < 2 {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Format hint from a declared file name or URL.
pub fn format_from_filename(declared: &str) -> Option<FormatTag> {
    let ext = extension_of(declared)?;
    EXT_TO_FORMAT.get(ext.as_str()).copied()
}

/// Strip parameters and whitespace from a Content-Type value and lowercase it.
pub fn essence(mime: &str) -> String {
    mime.split(';').next().unwrap_or_default().trim().to_ascii_lowercase()
}

/// Format hint from a declared MIME type. Absent or unrecognized types give no hint.
pub fn format_from_mime(mime: &str) -> Option<FormatTag> {
    MIME_TO_FORMAT.get(essence(mime).as_str()).copied()
}

/// Canonical MIME type for a format, if it has one.
pub fn mime_for_format(format: FormatTag) -> Option<&'static str> {
    match format {
        FormatTag::Pdf => Some(PDF_MIME_TYPE),
        FormatTag::Docx => Some(DOCX_MIME_TYPE),
        FormatTag::LegacyDoc => Some(LEGACY_WORD_MIME_TYPE),
        FormatTag::PlainText => Some(PLAIN_TEXT_MIME_TYPE),
        FormatTag::Unknown => None,
    }
}
