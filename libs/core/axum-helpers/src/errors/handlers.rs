use axum::BoxError;
use axum::response::{IntoResponse, Response};
use tower::timeout::error::Elapsed;

use super::AppError;

/// Router fallback for unknown paths.
pub async fn not_found() -> Response {
    AppError::not_found("The requested resource was not found").into_response()
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed() -> Response {
    AppError::bad_request("Method not allowed").into_response()
}

/// Turns errors from the timeout layer into the JSON error body.
pub async fn handle_timeout(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::internal_error("Request timed out")
    } else {
        AppError::internal_error(format!("Unhandled middleware error: {err}"))
    }
}
