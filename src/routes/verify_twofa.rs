use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::{LoginResponse, TwoFACode, VerifyTwoFaRequestBody};
use crate::errors::VerifyTwoFaError;
use crate::services::{TwoFaCodeService, TwoFaError};
use crate::utils::auth::{decode_token, generate_session_cookie, PURPOSE_PENDING_2FA};
use crate::utils::{clear_cookie, PENDING_2FA_COOKIE_NAME};

/// Second login step. Needs the pending-2FA cookie from step one; a missing
/// or undecodable marker means the login attempt is over. On a wrong or
/// stale code the marker is left in place so the user can retry.
pub async fn verify_twofa(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<VerifyTwoFaRequestBody>,
) -> Result<(CookieJar, impl IntoResponse), VerifyTwoFaError> {
    let code =
        TwoFACode::parse(request.code).or(Err(VerifyTwoFaError::MalformedCode))?;

    let user_id = {
        let config = state.config.read().await;
        let marker = jar
            .get(PENDING_2FA_COOKIE_NAME)
            .ok_or(VerifyTwoFaError::SessionExpired)?;
        let claims = decode_token(marker.value(), PURPOSE_PENDING_2FA, &config)
            .map_err(|_| VerifyTwoFaError::SessionExpired)?;
        Uuid::parse_str(&claims.sub).map_err(|_| VerifyTwoFaError::SessionExpired)?
    };

    TwoFaCodeService::verify(&state, user_id, &code)
        .await
        .map_err(|e| match e {
            TwoFaError::IncorrectCode => VerifyTwoFaError::IncorrectCode,
            TwoFaError::ExpiredCode => VerifyTwoFaError::ExpiredCode,
            TwoFaError::UserNotFound => VerifyTwoFaError::UserNotFound,
            TwoFaError::UnexpectedError => VerifyTwoFaError::InternalServerError,
        })?;

    let jar = {
        let config = state.config.read().await;
        let session = generate_session_cookie(user_id, &config)
            .map_err(|_| VerifyTwoFaError::InternalServerError)?;
        jar.add(session)
            .add(clear_cookie(PENDING_2FA_COOKIE_NAME, "/auth"))
    };

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(LoginResponse {
                message: "Authentication successful.".to_string(),
            }),
        ),
    ))
}
