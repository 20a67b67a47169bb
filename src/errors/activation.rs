use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Errors for the activation-link, activation-status and resend routes.
/// Bad signature and stale expiry are reported with one message so the link
/// itself leaks nothing about which check failed.
#[derive(Error, Debug)]
pub enum ActivationError {
    #[error("Invalid or expired URL.")]
    InvalidOrExpiredLink,

    #[error("The user does not exist.")]
    UserNotFound,

    #[error("Failed to send the activation email, please try again later.")]
    EmailDispatchFailed,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for ActivationError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ActivationError::InvalidOrExpiredLink => StatusCode::UNAUTHORIZED,
            ActivationError::UserNotFound => StatusCode::NOT_FOUND,
            ActivationError::EmailDispatchFailed => StatusCode::BAD_GATEWAY,
            ActivationError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
