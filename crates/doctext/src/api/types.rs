//! API request and response types.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::fetch::DocumentSource;
use crate::{ErrorKind, FormatTag};

/// API server size limit configuration.
#[derive(Debug, Clone, Copy)]
pub struct ApiSizeLimits {
    /// Maximum size of the entire request body in bytes.
    pub max_request_body_bytes: usize,
}

impl Default for ApiSizeLimits {
    fn default() -> Self {
        Self {
            max_request_body_bytes: 1024 * 1024,
        }
    }
}

impl ApiSizeLimits {
    pub fn new(max_request_body_bytes: usize) -> Self {
        Self { max_request_body_bytes }
    }
}

/// Landing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    pub status: String,
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    /// API version
    pub version: String,
}

/// Server information response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub version: String,
    /// Formats that can produce text
    pub supported_formats: Vec<FormatTag>,
}

/// `POST /extract` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub url: String,
    /// Bearer credential forwarded to the document host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// `POST /extract` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub url: String,
    pub format: FormatTag,
    pub text: String,
}

/// `POST /extract-job-description` body. Both fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptionRequest {
    pub file_url: String,
    pub api_key: String,
}

/// `POST /extract-job-description` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptionResponse {
    pub extracted_text: String,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Extraction taxonomy, absent for request validation and I/O errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    /// Error type name
    pub error_type: String,
    /// Error message
    pub message: String,
    /// HTTP status code
    pub status_code: u16,
}

/// API server state.
///
/// Holds the document source shared by all requests.
#[derive(Clone)]
pub struct ApiState {
    pub source: Arc<dyn DocumentSource>,
}
