//! Content-based format sniffing.
//!
//! Only the leading signature bytes are inspected. The ZIP signature is shared
//! by every OOXML container (and by plain archives), so a `Docx` verdict here is
//! provisional: the DOCX extractor confirms the `word/document.xml` part before
//! it reads anything.

use crate::types::FormatTag;

/// Number of leading bytes the sniffer may look at.
pub const SNIFF_PREFIX_LEN: usize = 8;

const PDF_SIGNATURE: &[u8] = b"%PDF";
const ZIP_LOCAL_FILE_HEADER: &[u8] = &[0x50, 0x4B, 0x03, 0x04];
const COMPOUND_FILE_SIGNATURE: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];

/// Classify a buffer by its leading bytes. Never fails; `Unknown` at worst.
pub fn sniff(bytes: &[u8]) -> FormatTag {
    let prefix = &bytes[..bytes.len().min(SNIFF_PREFIX_LEN)];

    if prefix.starts_with(PDF_SIGNATURE) {
        FormatTag::Pdf
    } else if prefix.starts_with(ZIP_LOCAL_FILE_HEADER) {
        FormatTag::Docx
    } else if prefix.starts_with(COMPOUND_FILE_SIGNATURE) {
        FormatTag::LegacyDoc
    } else {
        FormatTag::Unknown
    }
}
