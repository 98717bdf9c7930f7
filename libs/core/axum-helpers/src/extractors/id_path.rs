use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::marker::PhantomData;

/// Names the path parameter in rejection messages.
pub trait IdLabel: Send + Sync {
    const NAME: &'static str;
}

/// Label used when none is given.
#[derive(Debug)]
pub struct AnyId;

impl IdLabel for AnyId {
    const NAME: &'static str = "id";
}

/// Single numeric path parameter.
///
/// A non-numeric segment is rejected with `bad_request`
/// `"<label> should be a number"`.
///
/// ```ignore
/// struct User;
/// impl IdLabel for User {
///     const NAME: &'static str = "user id";
/// }
///
/// async fn get_user(IdPath(id, ..): IdPath<User>) -> String {
///     format!("User ID: {}", id)
/// }
/// ```
#[derive(Debug)]
pub struct IdPath<L: IdLabel = AnyId>(pub i64, pub PhantomData<L>);

impl<L: IdLabel> IdPath<L> {
    pub fn id(&self) -> i64 {
        self.0
    }

    pub fn parse(raw: &str) -> Result<i64, AppError> {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| AppError::bad_request(format!("{} should be a number", L::NAME)))
    }
}

impl<S, L> FromRequestParts<S> for IdPath<L>
where
    S: Send + Sync,
    L: IdLabel,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(IdPath(Self::parse(&raw)?, PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    struct Widget;
    impl IdLabel for Widget {
        const NAME: &'static str = "widget id";
    }

    #[test]
    fn test_parse_accepts_integers() {
        assert_eq!(IdPath::<Widget>::parse("42").unwrap(), 42);
        assert_eq!(IdPath::<Widget>::parse("-3").unwrap(), -3);
    }

    #[test]
    fn test_parse_rejects_text_with_label() {
        let err = IdPath::<Widget>::parse("abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.message(), "widget id should be a number");
    }

    #[test]
    fn test_default_label() {
        let err = IdPath::<AnyId>::parse("1.5").unwrap_err();
        assert_eq!(err.message(), "id should be a number");
    }
}
