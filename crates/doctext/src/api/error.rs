//! Mapping from [`DoctextError`] to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;
use crate::{DoctextError, ErrorKind};

/// Error returned by every handler.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error: DoctextError) -> Self {
        Self {
            status,
            body: ErrorResponse {
                success: false,
                error_kind: error.kind(),
                error_type: error.type_name().to_string(),
                message: error.to_string(),
                status_code: status.as_u16(),
            },
        }
    }

    /// 400 for a request the handler could not accept.
    pub fn validation(error: DoctextError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }
}

/// Status for each error class.
pub fn status_for(error: &DoctextError) -> StatusCode {
    match error.kind() {
        Some(ErrorKind::FetchFailed) => StatusCode::BAD_GATEWAY,
        Some(ErrorKind::UnrecognizedFormat | ErrorKind::UnsupportedFormat) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        Some(ErrorKind::MalformedDocument | ErrorKind::NoExtractableText) => StatusCode::UNPROCESSABLE_ENTITY,
        None => match error {
            DoctextError::Validation { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}

impl From<DoctextError> for ApiError {
    fn from(error: DoctextError) -> Self {
        let status = status_for(&error);
        if status.is_server_error() {
            tracing::error!(error = %error, "Request failed");
        } else {
            tracing::info!(status = status.as_u16(), error_type = error.type_name(), "Request rejected");
        }
        Self::new(status, error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
