//! REST API server for doctext.
//!
//! An Axum router that fetches a remote document and returns its text.
//!
//! # Endpoints
//!
//! - `GET /` - Liveness banner
//! - `GET /health` - Health check endpoint
//! - `GET /info` - Server information and supported formats
//! - `POST /extract` - Extract text from a URL (`{"url", "api_key"?}`)
//! - `POST /extract-job-description` - Extract text from an authenticated URL (`{"file_url", "api_key"}`)
//!
//! # Embedding the router in your app
//!
//! ```no_run
//! use std::sync::Arc;
//! use doctext::{DoctextConfig, api::create_router, fetch::HttpFetcher};
//! use axum::Router;
//!
//! # fn main() -> doctext::Result<()> {
//! let config = DoctextConfig::default();
//! let fetcher = Arc::new(HttpFetcher::new(&config.fetch)?);
//! let app = Router::new().nest("/documents", create_router(fetcher, &config.server));
//! # Ok(())
//! # }
//! ```
//!
//! # cURL Examples
//!
//! ```bash
//! curl -X POST http://localhost:8000/extract \
//!      -H 'Content-Type: application/json' \
//!      -d '{"url": "https://files.example.com/resume.pdf"}'
//!
//! curl http://localhost:8000/health
//! ```

mod error;
mod handlers;
mod server;
mod types;

pub use error::{ApiError, status_for};
pub use server::{create_router, create_router_with_limits, serve};
pub use types::{
    ApiSizeLimits, ApiState, ErrorResponse, ExtractRequest, ExtractResponse, HealthResponse, HomeResponse,
    InfoResponse, JobDescriptionRequest, JobDescriptionResponse,
};
