use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, ErrorResponse, IdLabel, IdPath, JsonBody,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, InvalidRequestResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserResult, messages};
use crate::models::{DeleteResponse, User};
use crate::repository::UserRepository;
use crate::service::UserService;

const TAG: &str = "users";

/// Labels the `{id}` segment of user routes.
#[derive(Debug)]
pub struct UserIdLabel;

impl IdLabel for UserIdLabel {
    const NAME: &'static str = "user id";
}

pub type UserId = IdPath<UserIdLabel>;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(User, DeleteResponse, ErrorResponse),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            InvalidRequestResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the user router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/", get(list_users::<R>).post(create_user::<R>))
        .route(
            "/{id}",
            get(get_user::<R>)
                .put(update_user::<R>)
                .delete(delete_user::<R>),
        )
        .with_state(Arc::new(service))
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All users ordered by id", body = Vec<User>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = User,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(candidate): JsonBody<User>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(candidate).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id, ..): UserId,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Replace a user's fields
///
/// The path id wins; a body id of `0` or none at all is filled from it.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = User,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = InvalidRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id, ..): UserId,
    JsonBody(mut candidate): JsonBody<User>,
) -> UserResult<Json<User>> {
    if candidate.id != 0 && candidate.id != id {
        return Err(AppError::invalid_request(messages::ID_MISMATCH));
    }
    candidate.id = id;

    let user = service.update_user(candidate).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = DeleteResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id, ..): UserId,
) -> UserResult<Json<DeleteResponse>> {
    service.delete_user(id).await?;
    Ok(Json(DeleteResponse::deleted()))
}
