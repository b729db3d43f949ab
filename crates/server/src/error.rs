//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roost_gallery::{FetchError, PageError, TraitsError};
use serde::Serialize;

/// API error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Page(#[from] PageError),

    #[error("{0}")]
    Traits(#[from] TraitsError),

    #[error("core error: {0}")]
    Core(#[from] roost_core::Error),
}

impl ApiError {
    /// Get the error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::Fetch(_) => "image_fetch_failed",
            Self::Page(PageError::Verification(_)) => "verification_failed",
            Self::Page(PageError::Task(_)) => "internal_error",
            Self::Traits(_) => "traits_unavailable",
            Self::Core(_) => "core_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Fetch(_) | Self::Traits(_) => StatusCode::BAD_GATEWAY,
            Self::Page(e) => match e {
                PageError::Verification(_) => StatusCode::BAD_GATEWAY,
                PageError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Core(e) => match e {
                roost_core::Error::ItemOutOfRange { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_REQUEST,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(code = self.code(), error = %self, "Request failed");
        }
        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
