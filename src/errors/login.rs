use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Email must be a valid email address.")]
    InvalidEmail,

    #[error("Password is required.")]
    InvalidPassword,

    // Covers both unknown email and wrong password.
    #[error("Incorrect username or password.")]
    InvalidCredentials,

    #[error("Your account is not active, check your email to activate your account.")]
    AccountInactive,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LoginError::Json(_) => StatusCode::BAD_REQUEST,
            LoginError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            LoginError::InvalidPassword => StatusCode::UNPROCESSABLE_ENTITY,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LoginError::AccountInactive => StatusCode::FORBIDDEN,
            LoginError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
