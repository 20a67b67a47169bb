use axum::extract::{Path, Query, State};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::{LoginResponse, UserStoreError};
use crate::errors::ActivationError;
use crate::services::ActivationService;

#[derive(Deserialize)]
pub struct ActivateQuery {
    pub expires: i64,
    pub signature: String,
}

/// Consume a signed activation link. The signature is checked before the
/// user is even looked up, mirroring signed-route middleware.
pub async fn activate(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ActivateQuery>,
) -> Result<impl IntoResponse, ActivationError> {
    ActivationService::verify_link(&state, user_id, query.expires, &query.signature)
        .await
        .map_err(|_| ActivationError::InvalidOrExpiredLink)?;

    ActivationService::activate(&state, user_id)
        .await
        .map_err(|e| match e {
            UserStoreError::UserNotFound => ActivationError::UserNotFound,
            _ => ActivationError::InternalServerError,
        })?;

    log::info!("activated user {user_id}");
    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            message: "Account activated successfully.".to_string(),
        }),
    ))
}
