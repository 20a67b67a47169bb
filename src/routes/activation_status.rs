use axum::extract::{Path, State};
use axum::{http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::{ActivationStatusResponse, UserStore, UserStoreError};
use crate::errors::ActivationError;

pub async fn activation_status(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, ActivationError> {
    let user = state
        .user_store
        .read()
        .await
        .get_user_by_id(user_id)
        .await
        .map_err(|e| match e {
            UserStoreError::UserNotFound => ActivationError::UserNotFound,
            _ => ActivationError::InternalServerError,
        })?;

    Ok((
        StatusCode::OK,
        Json(ActivationStatusResponse {
            user_id: user.id,
            is_active: user.is_active,
        }),
    ))
}
