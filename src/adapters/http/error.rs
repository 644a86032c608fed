//! Error responses shared by every endpoint.
//!
//! All non-2xx bodies have the shape `{"error":{"code":..,"message":..}}`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{BoxError, Json};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Body of an error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Wire code, e.g. `NOT_FOUND` or `PR_MERGED`.
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

/// HTTP status for each error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::TeamExists | ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::PullRequestExists
        | ErrorCode::PullRequestMerged
        | ErrorCode::NotAssigned
        | ErrorCode::NoCandidate => StatusCode::CONFLICT,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    /// Rejection for a query parameter that was not supplied.
    pub fn missing_param(name: &str) -> Self {
        Self(
            DomainError::new(
                ErrorCode::ValidationFailed,
                format!("{} parameter is required", name),
            )
            .with_detail("field", name),
        )
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::new(
            ErrorCode::ValidationFailed,
            format!("invalid request body: {}", rejection.body_text()),
        ))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(DomainError::new(
            ErrorCode::ValidationFailed,
            format!("invalid query string: {}", rejection.body_text()),
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code);
        if status.is_server_error() {
            tracing::error!(code = %self.0.code, error = %self.0.message, "request failed");
        } else {
            tracing::debug!(code = %self.0.code, error = %self.0.message, "request rejected");
        }

        let body = ErrorResponse::new(self.0.code.to_string(), self.0.message);
        (status, Json(body)).into_response()
    }
}

/// Wire code for requests cut off by the timeout layer.
pub const REQUEST_TIMEOUT_CODE: &str = "REQUEST_TIMEOUT";

/// Turns errors raised by the middleware stack into the standard body.
///
/// A timeout becomes `408 REQUEST_TIMEOUT`; the dropped handler future
/// rolls back any open transaction. Anything else is an internal error.
pub async fn handle_middleware_error(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("request timed out");
        let body = ErrorResponse::new(REQUEST_TIMEOUT_CODE, "request timed out");
        return (StatusCode::REQUEST_TIMEOUT, Json(body)).into_response();
    }

    ApiError(DomainError::new(
        ErrorCode::InternalError,
        format!("unhandled middleware error: {}", err),
    ))
    .into_response()
}

/// Returns the value of a required query parameter.
pub fn require_param(value: Option<String>, name: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::missing_param(name))
}
