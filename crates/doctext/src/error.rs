//! Error types for doctext.
//!
//! Every failure that leaves the library is a [`DoctextError`]. The variants that
//! the extraction core can produce map one-to-one onto [`ErrorKind`], the
//! wire-level taxonomy callers switch on:
//!
//! - `UnrecognizedFormat` - sniffing, extension and MIME all came up empty
//! - `UnsupportedFormat` - recognized, but deliberately not extracted (legacy `.doc`)
//! - `MalformedDocument` - the chosen extractor could not parse the bytes
//! - `NoExtractableText` - parsing succeeded but produced only whitespace
//! - `FetchFailed` - the remote download failed before the core ran
//!
//! `Validation` and `Io` never come out of the core; they belong to the outer
//! layers (config loading, request parsing, reading local files). `Io` errors
//! always bubble up unchanged.
//!
//! # Example
//!
//! ```rust
//! use doctext::{DoctextError, ErrorKind};
//!
//! let err = DoctextError::malformed("truncated central directory");
//! assert_eq!(err.kind(), Some(ErrorKind::MalformedDocument));
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using `DoctextError`.
pub type Result<T> = std::result::Result<T, DoctextError>;

/// Error classification shared by every result surface (library, CLI, HTTP).
///
/// None of these are retried inside the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    UnrecognizedFormat,
    UnsupportedFormat,
    MalformedDocument,
    NoExtractableText,
    FetchFailed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnrecognizedFormat => "UnrecognizedFormat",
            ErrorKind::UnsupportedFormat => "UnsupportedFormat",
            ErrorKind::MalformedDocument => "MalformedDocument",
            ErrorKind::NoExtractableText => "NoExtractableText",
            ErrorKind::FetchFailed => "FetchFailed",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for all doctext operations.
#[derive(Debug, Error)]
pub enum DoctextError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized format: {0}")]
    UnrecognizedFormat(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed document: {message}")]
    MalformedDocument {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("No extractable text found in {format} document")]
    NoExtractableText { format: String },

    #[error("Fetch failed: {message}")]
    FetchFailed {
        message: String,
        status: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<zip::result::ZipError> for DoctextError {
    fn from(err: zip::result::ZipError) -> Self {
        DoctextError::MalformedDocument {
            message: format!("invalid ZIP container: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<roxmltree::Error> for DoctextError {
    fn from(err: roxmltree::Error) -> Self {
        DoctextError::MalformedDocument {
            message: format!("invalid XML: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<lopdf::Error> for DoctextError {
    fn from(err: lopdf::Error) -> Self {
        DoctextError::MalformedDocument {
            message: format!("invalid PDF: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl DoctextError {
    error_constructor!(malformed, MalformedDocument);
    error_constructor!(validation, Validation);

    /// Create a FetchFailed error, optionally carrying the upstream HTTP status.
    pub fn fetch_failed<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        Self::FetchFailed {
            message: message.into(),
            status,
            source: None,
        }
    }

    /// Create a FetchFailed error with source
    pub fn fetch_failed_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        status: Option<u16>,
        source: E,
    ) -> Self {
        Self::FetchFailed {
            message: message.into(),
            status,
            source: Some(Box::new(source)),
        }
    }

    /// Classify this error. `None` for errors raised outside the extraction core.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            DoctextError::UnrecognizedFormat(_) => Some(ErrorKind::UnrecognizedFormat),
            DoctextError::UnsupportedFormat(_) => Some(ErrorKind::UnsupportedFormat),
            DoctextError::MalformedDocument { .. } => Some(ErrorKind::MalformedDocument),
            DoctextError::NoExtractableText { .. } => Some(ErrorKind::NoExtractableText),
            DoctextError::FetchFailed { .. } => Some(ErrorKind::FetchFailed),
            DoctextError::Validation { .. } | DoctextError::Io(_) => None,
        }
    }

    /// Short type name used in API error bodies.
    pub fn type_name(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.as_str(),
            None => match self {
                DoctextError::Io(_) => "Io",
                _ => "Validation",
            },
        }
    }
}
