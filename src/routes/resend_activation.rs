use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{LoginResponse, ResendActivationRequestBody};
use crate::errors::ActivationError;
use crate::services::{ActivationService, ReissueError, ReissueOutcome};

/// Re-send an activation link for a user whose previous link went stale.
pub async fn resend_activation(
    State(state): State<AppState>,
    Json(request): Json<ResendActivationRequestBody>,
) -> Result<impl IntoResponse, ActivationError> {
    let outcome = ActivationService::reissue(&state, request.user_id)
        .await
        .map_err(|e| match e {
            ReissueError::UserNotFound => ActivationError::UserNotFound,
            ReissueError::EmailDispatch(_) => ActivationError::EmailDispatchFailed,
            ReissueError::UnexpectedError => ActivationError::InternalServerError,
        })?;

    let message = match outcome {
        ReissueOutcome::AlreadyActive => "The account is active, sign in.",
        ReissueOutcome::LinkSent => "A new activation link has been sent to your email.",
    };

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            message: message.to_string(),
        }),
    ))
}
