//! API server setup and configuration.

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::core::config::{DoctextConfig, ServerConfig};
use crate::fetch::{DocumentSource, HttpFetcher};
use crate::{DoctextError, Result};

use super::{
    handlers::{extract_handler, health_handler, home_handler, info_handler, job_description_handler},
    types::{ApiSizeLimits, ApiState},
};

fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<_> = origins
        .iter()
        .filter_map(|s| s.trim().parse::<axum::http::HeaderValue>().ok())
        .collect();

    if parsed.is_empty() {
        if !origins.is_empty() {
            tracing::warn!("cors_origins set but none are valid - falling back to permissive CORS");
        }
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        tracing::info!("CORS configured with {} explicit allowed origin(s)", parsed.len());
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Create the API router.
///
/// Public so the routes can be nested inside a larger application, or driven
/// with a custom [`DocumentSource`] in tests.
pub fn create_router(source: Arc<dyn DocumentSource>, server: &ServerConfig) -> Router {
    create_router_with_limits(source, &server.cors_origins, ApiSizeLimits::new(server.max_request_body_bytes))
}

/// Create the API router with explicit CORS origins and size limits.
pub fn create_router_with_limits(
    source: Arc<dyn DocumentSource>,
    cors_origins: &[String],
    limits: ApiSizeLimits,
) -> Router {
    let state = ApiState { source };

    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .route("/extract", post(extract_handler))
        .route("/extract-job-description", post(job_description_handler))
        .layer(DefaultBodyLimit::max(limits.max_request_body_bytes))
        .layer(RequestBodyLimitLayer::new(limits.max_request_body_bytes))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server.
///
/// Binds `config.server.host:config.server.port` and fetches documents with an
/// [`HttpFetcher`] built from `config.fetch`.
///
/// # Examples
///
/// ```no_run
/// use doctext::{DoctextConfig, api::serve};
///
/// #[tokio::main]
/// async fn main() -> doctext::Result<()> {
///     let config = DoctextConfig::load(None)?;
///     serve(config).await
/// }
/// ```
pub async fn serve(config: DoctextConfig) -> Result<()> {
    let ip: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| DoctextError::validation(format!("Invalid host address: {}", e)))?;

    let addr = SocketAddr::new(ip, config.server.port);
    let source: Arc<dyn DocumentSource> = Arc::new(HttpFetcher::new(&config.fetch)?);
    let app = create_router(source, &config.server);

    tracing::info!("Starting doctext API server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(DoctextError::Io)?;

    axum::serve(listener, app).await.map_err(DoctextError::Io)?;

    Ok(())
}
