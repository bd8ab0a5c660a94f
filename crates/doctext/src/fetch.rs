//! Remote document retrieval.
//!
//! [`DocumentSource`] is the seam between the network and the extraction core:
//! the core never performs I/O itself. [`HttpFetcher`] is the production
//! implementation; tests substitute their own source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};

use crate::core::config::FetchConfig;
use crate::core::pipeline::extract_document;
use crate::types::{Extraction, RawDocument};
use crate::{DoctextError, Result};

/// Bytes retrieved from a remote location, plus what the server said about them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    pub url: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl From<FetchedDocument> for RawDocument {
    fn from(fetched: FetchedDocument) -> Self {
        let document = RawDocument::new(fetched.bytes).with_filename(fetched.url);
        match fetched.content_type {
            Some(mime) => document.with_mime(mime),
            None => document,
        }
    }
}

/// Anything that can turn a URL (and optional bearer credential) into bytes.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Retrieve the full document.
    ///
    /// # Errors
    ///
    /// `FetchFailed` for any transport, status or size problem.
    async fn fetch(&self, url: &str, bearer: Option<&str>) -> Result<FetchedDocument>;
}

/// `reqwest`-backed [`DocumentSource`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    max_download_bytes: u64,
}

impl HttpFetcher {
    /// Build a fetcher from configuration. The client is reused for every request.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| DoctextError::validation_with_source("Invalid user agent", e))?;
        headers.insert(USER_AGENT, agent);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| DoctextError::fetch_failed_with_source("Failed to create HTTP client", None, e))?;

        Ok(Self {
            client,
            max_download_bytes: config.max_download_bytes,
        })
    }

    fn too_large(&self, size: u64) -> DoctextError {
        DoctextError::fetch_failed(
            format!(
                "document is {} bytes, larger than the {} byte download limit",
                size, self.max_download_bytes
            ),
            None,
        )
    }
}

#[async_trait]
impl DocumentSource for HttpFetcher {
    async fn fetch(&self, url: &str, bearer: Option<&str>) -> Result<FetchedDocument> {
        tracing::debug!(url, authenticated = bearer.is_some(), "Fetching document");

        let mut request = self.client.get(url);
        if let Some(token) = bearer {
            request = request
                .header(AUTHORIZATION, format!("Bearer {}", token))
                .header(ACCEPT, "*/*");
        }

        let mut response = request.send().await.map_err(|e| {
            let status = e.status().map(|s| s.as_u16());
            DoctextError::fetch_failed_with_source(format!("request to {} failed: {}", url, e), status, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DoctextError::fetch_failed(
                format!("{} returned {}", url, status),
                Some(status.as_u16()),
            ));
        }

        if let Some(length) = response.content_length()
            && length > self.max_download_bytes
        {
            return Err(self.too_large(length));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| {
            DoctextError::fetch_failed_with_source(
                format!("reading body from {} failed: {}", url, e),
                Some(status.as_u16()),
                e,
            )
        })? {
            bytes.extend_from_slice(&chunk);
            if bytes.len() as u64 > self.max_download_bytes {
                return Err(self.too_large(bytes.len() as u64));
            }
        }

        tracing::debug!(url, size = bytes.len(), content_type = content_type.as_deref(), "Fetched document");

        Ok(FetchedDocument {
            url: url.to_string(),
            content_type,
            bytes,
        })
    }
}

/// Fetch a document and extract its text.
///
/// Parsing runs on the blocking thread pool.
pub async fn extract_from_url(source: &dyn DocumentSource, url: &str, bearer: Option<&str>) -> Result<Extraction> {
    let fetched = source.fetch(url, bearer).await?;
    let document = RawDocument::from(fetched);

    tokio::task::spawn_blocking(move || extract_document(&document))
        .await
        .map_err(|e| DoctextError::malformed(format!("extraction task failed: {}", e)))?
}
