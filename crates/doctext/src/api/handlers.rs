//! API request handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::fetch::extract_from_url;
use crate::{DoctextError, extractors::supported_formats};

use super::{
    error::ApiError,
    types::{
        ApiState, ExtractRequest, ExtractResponse, HealthResponse, HomeResponse, InfoResponse, JobDescriptionRequest,
        JobDescriptionResponse,
    },
};

/// Home handler.
///
/// GET /
pub async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        status: "running".to_string(),
        message: "Document text extraction service is running".to_string(),
    })
}

/// Health check handler.
///
/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Server info handler.
///
/// GET /info
pub async fn info_handler() -> Json<InfoResponse> {
    Json(InfoResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_formats: supported_formats().to_vec(),
    })
}

/// Extract endpoint handler.
///
/// POST /extract
///
/// Accepts `{"url": ..., "api_key": ...}`; `api_key` is optional and sent to the
/// document host as a bearer token.
pub async fn extract_handler(
    State(state): State<ApiState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let Json(request) = payload.map_err(reject_body)?;
    let url = require("url", &request.url)?;
    let bearer = request.api_key.as_deref().map(str::trim).filter(|key| !key.is_empty());

    let extraction = extract_from_url(state.source.as_ref(), url, bearer).await?;

    Ok(Json(ExtractResponse {
        success: true,
        url: url.to_string(),
        format: extraction.format,
        text: extraction.text,
    }))
}

/// Job description handler.
///
/// POST /extract-job-description
///
/// Same pipeline as `/extract`, but the credential is mandatory and the response
/// carries only the text.
pub async fn job_description_handler(
    State(state): State<ApiState>,
    payload: Result<Json<JobDescriptionRequest>, JsonRejection>,
) -> Result<Json<JobDescriptionResponse>, ApiError> {
    let Json(request) = payload.map_err(reject_body)?;
    let url = require("file_url", &request.file_url)?;
    let api_key = require("api_key", &request.api_key)?;

    let extraction = extract_from_url(state.source.as_ref(), url, Some(api_key)).await?;

    Ok(Json(JobDescriptionResponse {
        extracted_text: extraction.text,
    }))
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    let error = DoctextError::validation(format!("Invalid request body: {}", rejection.body_text()));
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, error);
    }
    ApiError::validation(error)
}

fn require<'a>(field: &str, value: &'a str) -> Result<&'a str, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::validation(DoctextError::validation(format!(
            "{} is required",
            field
        ))));
    }
    Ok(value)
}
