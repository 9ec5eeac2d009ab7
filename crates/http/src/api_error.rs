//! Typed API error for HTTP handlers.
//!
//! The only place service error kinds become HTTP statuses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contentrest_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to `{"error": "message", "kind": "..."}`. `Internal` logs the
/// real error server-side and returns a static message.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: missing or malformed input.
    BadRequest(String),
    /// 400 Bad Request: the node exists but has the wrong type.
    InvalidNodeType(String),
    /// 404 Not Found
    NotFound(String),
    /// 422 Unprocessable Entity: stale or foreign job handle.
    UnprocessableEntity(String),
    /// 503 Service Unavailable: backing store unreachable.
    ServiceUnavailable(String),
    /// 500 Internal Server Error
    Internal(anyhow::Error),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match *self {
            Self::BadRequest(_) | Self::InvalidNodeType(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn kind(&self) -> &'static str {
        match *self {
            Self::BadRequest(_) => "invalid_argument",
            Self::InvalidNodeType(_) => "invalid_node_type",
            Self::NotFound(_) => "not_found",
            Self::UnprocessableEntity(_) => "unprocessable",
            Self::ServiceUnavailable(_) => "unavailable",
            Self::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();
        let message = match self {
            Self::BadRequest(msg)
            | Self::InvalidNodeType(msg)
            | Self::NotFound(msg)
            | Self::UnprocessableEntity(msg)
            | Self::ServiceUnavailable(msg) => msg,
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                "internal server error".to_owned()
            },
        };
        let body = serde_json::json!({"error": message, "kind": kind});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidArgument(msg) => Self::BadRequest(msg),
            ServiceError::NotFound { entity, id } => {
                Self::NotFound(format!("{entity} '{id}' not found"))
            },
            err @ ServiceError::InvalidNodeType { .. } => Self::InvalidNodeType(err.to_string()),
            ServiceError::Unprocessable(msg) => Self::UnprocessableEntity(msg),
            e if e.is_transient() => Self::ServiceUnavailable(e.to_string()),
            other => Self::Internal(other.into()),
        }
    }
}
