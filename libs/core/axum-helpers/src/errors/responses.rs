//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Malformed request or failed validation",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "message": "User does not meet minimum age requirement,User email must be properly formatted",
        "error": "bad_request"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status": 404,
        "message": "User not found",
        "error": "not_found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Request contradicts the addressed resource",
    content_type = "application/json",
    example = json!({
        "status": 422,
        "message": "User id in body does not match path",
        "error": "invalid_request"
    })
)]
pub struct InvalidRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": 500,
        "message": "Database error: connection refused",
        "error": "server_error"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
