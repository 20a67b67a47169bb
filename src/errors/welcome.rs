use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WelcomeError {
    #[error("Please log in to continue.")]
    Unauthorized,
}

impl IntoResponse for WelcomeError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}
