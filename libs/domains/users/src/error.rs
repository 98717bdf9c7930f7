use axum_helpers::AppError;

pub type UserResult<T> = Result<T, AppError>;

/// Messages surfaced to clients. Tests and clients match on these verbatim.
pub mod messages {
    pub const FIRST_NAME_REQUIRED: &str = "Please enter a valid firstname";
    pub const LAST_NAME_REQUIRED: &str = "Please enter a valid lastname";
    pub const MINIMUM_AGE: &str = "User does not meet minimum age requirement";
    pub const EMAIL_FORMAT: &str = "User email must be properly formatted";
    pub const DUPLICATE_NAME: &str = "User with the same first and last name already exists";
    pub const USER_NOT_FOUND: &str = "User not found";
    pub const NO_USERS_FOUND: &str = "no users found";
    pub const ID_ON_CREATE: &str = "User id must not be supplied on create";
    pub const ID_MISMATCH: &str = "User id in body does not match path";
}

pub(crate) fn user_not_found() -> AppError {
    AppError::not_found(messages::USER_NOT_FOUND)
}

/// One `bad_request` carrying every violation, joined with `,`.
pub(crate) fn violations(messages: Vec<String>) -> UserResult<()> {
    if messages.is_empty() {
        Ok(())
    } else {
        Err(AppError::bad_request(messages.join(",")))
    }
}
