use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyTwoFaError {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The code must be a 6-digit number.")]
    MalformedCode,

    #[error("Session expired. Please log in again.")]
    SessionExpired,

    #[error("User not found.")]
    UserNotFound,

    #[error("Incorrect code.")]
    IncorrectCode,

    #[error("Code expired.")]
    ExpiredCode,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for VerifyTwoFaError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            VerifyTwoFaError::Json(_) => StatusCode::BAD_REQUEST,
            VerifyTwoFaError::MalformedCode => StatusCode::UNPROCESSABLE_ENTITY,
            VerifyTwoFaError::SessionExpired => StatusCode::UNAUTHORIZED,
            VerifyTwoFaError::UserNotFound => StatusCode::UNAUTHORIZED,
            VerifyTwoFaError::IncorrectCode => StatusCode::UNAUTHORIZED,
            VerifyTwoFaError::ExpiredCode => StatusCode::UNAUTHORIZED,
            VerifyTwoFaError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
