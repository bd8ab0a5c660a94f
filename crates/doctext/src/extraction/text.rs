//! Plain text decoding.

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode bytes as UTF-8, replacing invalid sequences with U+FFFD.
///
/// A leading byte-order mark and trailing line terminators are removed.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let text = String::from_utf8_lossy(bytes);
    text.trim_end_matches(['\n', '\r']).to_string()
}
