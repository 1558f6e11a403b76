//! # API Errors
//!
//! `DomainError` is the single vocabulary for failures reported to a caller.
//! Every variant maps to one HTTP status, and `IntoResponse` is the only
//! place an error response body is written.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for request handling
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors surfaced to API callers
#[derive(Debug, Error)]
pub enum DomainError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required field absent or blank
    #[error("Missing required fields")]
    MissingFields,

    /// Body was not a JSON object of the expected shape
    #[error("Invalid request body")]
    InvalidBody,

    /// Path id was not an integer
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Cheese write named a wine that does not exist
    #[error("Referenced wine does not exist")]
    UnknownWine,

    /// Point lookup found nothing
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Known path, unsupported method
    #[error("Method not allowed")]
    MethodNotAllowed,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store round trip exceeded the configured bound
    #[error("Database operation timed out")]
    Timeout,

    /// Unclassified store failure
    #[error("Internal server error")]
    Store(#[source] StoreError),
}

impl DomainError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            DomainError::MissingFields => StatusCode::BAD_REQUEST,
            DomainError::InvalidBody => StatusCode::BAD_REQUEST,
            DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
            DomainError::UnknownWine => StatusCode::BAD_REQUEST,

            // 404 Not Found
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,

            // 405 Method Not Allowed
            DomainError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            // 500 Internal Server Error
            DomainError::Timeout => StatusCode::INTERNAL_SERVER_ERROR,
            DomainError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ForeignKeyViolation => DomainError::UnknownWine,
            other => DomainError::Store(other),
        }
    }
}

/// Serialized form of a `DomainError`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl From<&DomainError> for ErrorBody {
    fn from(err: &DomainError) -> Self {
        Self {
            message: err.to_string(),
            status_code: err.status_code().as_u16(),
        }
    }
}

/// Failure envelope: `{ "success": false, "error": { message, statusCode } }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorBody,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            match &self {
                DomainError::Store(source) => {
                    tracing::error!(error = %source, "request failed in store");
                }
                other => tracing::error!(error = %other, "request failed"),
            }
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = ErrorResponse {
            success: false,
            error: ErrorBody::from(&self),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(DomainError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(DomainError::UnknownWine.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(DomainError::NotFound("Wine").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            DomainError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            DomainError::Timeout.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_names_resource() {
        assert_eq!(DomainError::NotFound("Cheese").to_string(), "Cheese not found");
    }

    #[test]
    fn test_foreign_key_violation_is_client_error() {
        let err = DomainError::from(StoreError::ForeignKeyViolation);
        assert!(matches!(err, DomainError::UnknownWine));
    }

    #[test]
    fn test_store_failure_does_not_leak_detail() {
        let err = DomainError::from(StoreError::Database(sqlx::Error::PoolTimedOut));
        let body = ErrorBody::from(&err);

        assert_eq!(body.status_code, 500);
        assert_eq!(body.message, "Internal server error");
    }

    #[test]
    fn test_error_body_serialization() {
        let body = ErrorBody::from(&DomainError::MissingFields);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["message"], "Missing required fields");
        assert_eq!(json["statusCode"], 400);
        assert!(json.get("status_code").is_none());
    }
}
