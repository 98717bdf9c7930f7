pub mod handlers;
pub mod kind;
pub mod responses;

pub use kind::ErrorKind;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error body written for every failed request.
///
/// ```json
/// {
///   "status": 404,
///   "message": "User not found",
///   "error": "not_found"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Human-readable message; validation failures are joined with `,`
    pub message: String,
    /// Classification tag
    pub error: ErrorKind,
}

/// Classified failure shared by repositories, services and handlers.
///
/// Construction has no side effects; logging happens once, when the
/// error is turned into a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRequest, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServerError, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_response_body(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status().as_u16(),
            message: self.message.clone(),
            error: self.kind,
        }
    }

    /// Rebuilds an error from a response body written by [`IntoResponse`].
    ///
    /// ```rust
    /// use axum_helpers::errors::{AppError, ErrorKind};
    ///
    /// let body = br#"{"status":404,"message":"User not found","error":"not_found"}"#;
    /// let err = AppError::from_response_bytes(body).unwrap();
    /// assert_eq!(err, AppError::not_found("User not found"));
    /// ```
    pub fn from_response_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let body: ErrorResponse = serde_json::from_slice(bytes)?;
        Ok(body.into())
    }
}

impl From<ErrorResponse> for AppError {
    fn from(body: ErrorResponse) -> Self {
        Self::new(body.error, body.message)
    }
}

/// Body decoding failures are client errors regardless of the rejection
/// axum picked (syntax, data shape, content type or size).
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::internal_error(format!("Database error: {}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.kind.is_server_error() {
            tracing::error!(error = %self.kind, "Request failed: {}", self.message);
        } else {
            tracing::info!(error = %self.kind, "Request rejected: {}", self.message);
        }

        (self.status(), Json(self.to_response_body())).into_response()
    }
}
