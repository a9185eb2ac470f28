//! Errors returned by request handlers and how they are rendered.
//!
//! Bodies are plain text: the validation message, the fixed method message,
//! or the store's own error text.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::persistence::PersistenceError;
use plants::ValidationError;

/// Seconds a client should wait before retrying an unavailable store.
const RETRY_AFTER_SECS: &str = "1";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed body, unparsable path id, or a rejected name. HTTP 400.
    #[error("{0}")]
    BadRequest(String),

    /// HTTP 405.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Any store failure other than unavailability, missing rows included.
    /// HTTP 500.
    #[error("{0}")]
    Storage(String),

    /// Pool exhausted or store deadline missed. HTTP 503, retryable.
    #[error("{0}")]
    Unavailable(String),

    /// HTTP 500.
    #[error("{0}")]
    Encoding(#[from] serde_json::Error),

    /// HTTP 500.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Encoding(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        if err.is_retryable() {
            ApiError::Unavailable(err.to_string())
        } else {
            ApiError::Storage(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let mut response = (
            status,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
            ],
            self.to_string(),
        )
            .into_response();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from_static(RETRY_AFTER_SECS));
        }
        response
    }
}
