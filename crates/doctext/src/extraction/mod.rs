//! Format-specific traversal code.
//!
//! Functions here know how each container is laid out and return raw text or a
//! [`DoctextError`](crate::DoctextError). Choosing which one to call and
//! checking the result is the job of [`crate::extractors`] and the pipeline.

pub mod docx;
pub mod pdf;
pub mod text;

pub use docx::{DocxContent, extract_docx_content, extract_docx_text};
pub use pdf::{extract_pdf_pages, extract_pdf_text};
pub use text::decode_text;

/// Ordered text fragments awaiting assembly.
///
/// Fragments are trimmed on the way in and dropped when nothing is left, so the
/// assembled text never starts or ends with a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextUnits {
    units: Vec<String>,
}

impl TextUnits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment if it has non-whitespace content.
    pub fn push(&mut self, fragment: &str) {
        let trimmed = fragment.trim();
        if !trimmed.is_empty() {
            self.units.push(trimmed.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.units
    }

    /// Join the fragments with single newlines.
    pub fn into_text(self) -> String {
        self.units.join("\n")
    }
}

impl<S: AsRef<str>> Extend<S> for TextUnits {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for fragment in iter {
            self.push(fragment.as_ref());
        }
    }
}
