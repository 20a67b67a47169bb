use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{Email, LoginRequestBody, TwoFactorChallengeResponse};
use crate::errors::LoginError;
use crate::services::AuthService;
use crate::utils::auth::generate_pending_2fa_cookie;

/// First login step. On success the response carries the signed pending-2FA
/// cookie and a 206, telling the client the emailed code is still owed.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequestBody>,
) -> Result<(CookieJar, impl IntoResponse), LoginError> {
    let email = Email::parse(request.email).or(Err(LoginError::InvalidEmail))?;
    if request.password.is_empty() {
        return Err(LoginError::InvalidPassword);
    }

    let user = AuthService::login(&state, email, &request.password).await?;

    let jar = {
        let config = state.config.read().await;
        let cookie = generate_pending_2fa_cookie(user.id, &config)
            .map_err(|_| LoginError::InternalServerError)?;
        jar.add(cookie)
    };

    Ok((
        jar,
        (
            StatusCode::PARTIAL_CONTENT,
            Json(TwoFactorChallengeResponse {
                message: "A code has been sent to your email.".to_string(),
            }),
        ),
    ))
}
