//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` to HTTP status codes and the JSON error bodies the
//! frontend expects: `{error}` for client errors and `{error, details}` for
//! server-side failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ekitrans_core::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The operation failed on the server side.
    #[error("{error}: {details}")]
    Failed { error: &'static str, details: String },
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl HttpError {
    /// Map a core error, labelling server-side failures with `failure`.
    pub fn from_core(err: CoreError, failure: &'static str) -> Self {
        match err {
            CoreError::Validation(msg) | CoreError::Repository(RepositoryError::Constraint(msg)) => {
                Self::BadRequest(msg)
            }
            CoreError::NotFound(msg) => Self::NotFound(msg),
            other => Self::Failed {
                error: failure,
                details: other.to_string(),
            },
        }
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => ErrorBody {
                error: msg,
                details: None,
            },
            Self::Failed { error, details } => {
                tracing::error!(target: "ekitrans.http", error, details = %details, "Request failed");
                ErrorBody {
                    error: error.to_string(),
                    details: Some(details),
                }
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
