//! Classification tags carried by every [`AppError`](super::AppError).
//!
//! ```rust
//! use axum_helpers::errors::ErrorKind;
//!
//! assert_eq!(ErrorKind::InvalidRequest.as_str(), "invalid_request");
//! assert_eq!(ErrorKind::InvalidRequest.status().as_u16(), 422);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed input or failed validation (400)
    BadRequest,
    /// Addressed record does not exist (404)
    NotFound,
    /// Well-formed request that contradicts the addressed resource (422)
    InvalidRequest,
    /// Persistence or other internal failure (500)
    ServerError,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidRequest => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Wire tag written to the `error` field.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::ServerError => "server_error",
        }
    }

    pub fn is_server_error(self) -> bool {
        self.status().is_server_error()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
