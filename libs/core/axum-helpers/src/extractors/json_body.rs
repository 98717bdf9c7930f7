use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};

/// `axum::Json` with an [`AppError`] rejection.
///
/// Unknown fields are rejected only when the target type says so
/// (`#[serde(deny_unknown_fields)]`).
///
/// ```ignore
/// async fn create_user(JsonBody(user): JsonBody<User>) -> AppResult<Json<User>> { ... }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

impl<T: Serialize> IntoResponse for JsonBody<T> {
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}
