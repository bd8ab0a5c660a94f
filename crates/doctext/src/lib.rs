//! doctext - plain-text extraction from PDF, DOCX and text documents.
//!
//! The crate decides what a buffer *is* from its leading bytes, falls back to
//! the declared file name and MIME type when the bytes are inconclusive, and
//! runs the matching extractor. Every call either returns non-blank text or one
//! of a small, closed set of errors ([`ErrorKind`]).
//!
//! # Quick Start
//!
//! ```rust
//! use doctext::{ErrorKind, FormatTag, extract};
//!
//! let extraction = extract(b"Line one\nLine two\n", Some("notes.txt"), None)?;
//! assert_eq!(extraction.format, FormatTag::PlainText);
//! assert_eq!(extraction.text, "Line one\nLine two");
//!
//! // Legacy Word documents are recognized by signature and rejected.
//! let err = extract(b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1", Some("cv.doc"), None).unwrap_err();
//! assert_eq!(err.kind(), Some(ErrorKind::UnsupportedFormat));
//! # Ok::<(), doctext::DoctextError>(())
//! ```
//!
//! # Features
//!
//! - `fetch` (default): [`fetch::HttpFetcher`] and [`fetch::extract_from_url`]
//! - `api`: Axum HTTP service in [`api`]

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod extraction;
pub mod extractors;
pub mod types;

#[cfg(feature = "fetch")]
pub mod fetch;

#[cfg(feature = "api")]
pub mod api;

pub use error::{DoctextError, ErrorKind, Result};
pub use types::*;

pub use core::config::{DoctextConfig, FetchConfig, ServerConfig};
pub use core::formats::{FormatEvidence, resolve, resolve_with_evidence};
pub use core::pipeline::{PipelineStage, detect_format, extract, extract_document, extract_outcome};
pub use core::sniff::sniff;
pub use extractors::{DocumentExtractor, extractor_for, supported_formats};

#[cfg(feature = "fetch")]
pub use fetch::{DocumentSource, FetchedDocument, HttpFetcher, extract_from_url};
