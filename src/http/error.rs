//! Client-facing errors.
//!
//! Every error leaves the service as a JSON object with a stable `error`
//! code and a human-readable `detail`.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::query::ParamError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A filter value outside its declared enumeration.
    #[error(transparent)]
    InvalidParameter(#[from] ParamError),

    /// The query string could not be decoded into the route's filters,
    /// e.g. a declared key given twice.
    #[error("malformed query string: {}", .0.body_text())]
    MalformedQuery(#[from] QueryRejection),

    /// No route matches the request path.
    #[error("no route for {method} {path}")]
    NotFound { method: String, path: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) | ApiError::MalformedQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidParameter(_) => "invalid_parameter",
            ApiError::MalformedQuery(_) => "invalid_query",
            ApiError::NotFound { .. } => "not_found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::InvalidParameter(e) => json!({
                "error": self.code(),
                "detail": self.to_string(),
                "parameter": e.parameter,
                "value": e.value,
                "allowed": e.allowed,
            }),
            ApiError::MalformedQuery(_) => json!({
                "error": self.code(),
                "detail": self.to_string(),
            }),
            ApiError::NotFound { path, .. } => json!({
                "error": self.code(),
                "detail": self.to_string(),
                "path": path,
            }),
        };

        tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        (status, Json(body)).into_response()
    }
}
