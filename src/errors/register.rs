use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One failed field with its user-facing message.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FieldValidationError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Serialize)]
struct ValidationErrorsBody {
    errors: Vec<FieldValidationError>,
}

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation failed")]
    Validation(Vec<FieldValidationError>),

    #[error("Email has already been taken.")]
    EmailTaken,

    // The user record is kept; a new link can be requested later.
    #[error("Failed to send the activation email, request a new link to activate your account.")]
    EmailDispatchFailed,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for RegisterError {
    fn into_response(self) -> axum::response::Response {
        match self {
            RegisterError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorsBody { errors }),
            )
                .into_response(),
            RegisterError::Json(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
            RegisterError::EmailTaken => (StatusCode::CONFLICT, self.to_string()).into_response(),
            RegisterError::EmailDispatchFailed => {
                (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
            }
            RegisterError::InternalServerError => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}
