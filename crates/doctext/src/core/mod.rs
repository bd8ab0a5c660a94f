//! Core extraction orchestration module.
//!
//! - **Sniffing**: classify bytes by their leading signature
//! - **MIME/extension hints**: map declared names and Content-Type values to formats
//! - **Resolution**: combine sniffed and declared evidence into one [`FormatTag`](crate::FormatTag)
//! - **Pipeline**: route the bytes to the matching extractor and validate the result
//! - **Configuration**: fetch and server settings, loaded from `doctext.toml`
//!
//! # Example
//!
//! ```rust
//! use doctext::core::pipeline::extract;
//!
//! let extraction = extract(b"quarterly numbers", None, Some("text/plain"))?;
//! assert_eq!(extraction.text, "quarterly numbers");
//! # Ok::<(), doctext::DoctextError>(())
//! ```

pub mod config;
pub mod formats;
pub mod mime;
pub mod pipeline;
pub mod sniff;

pub use config::{DoctextConfig, FetchConfig, ServerConfig};
pub use formats::{FormatEvidence, resolve, resolve_document, resolve_with_evidence};
pub use pipeline::{PipelineStage, detect_format, extract, extract_document, extract_outcome};
pub use sniff::sniff;
