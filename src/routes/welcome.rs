use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::{LoginResponse, UserStore};
use crate::errors::WelcomeError;
use crate::utils::auth::{decode_token, PURPOSE_SESSION};
use crate::utils::SESSION_COOKIE_NAME;

/// The only protected page: reachable strictly through a valid session
/// cookie, i.e. after both login factors passed.
pub async fn welcome(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, WelcomeError> {
    let user_id = {
        let config = state.config.read().await;
        let cookie = jar
            .get(SESSION_COOKIE_NAME)
            .ok_or(WelcomeError::Unauthorized)?;
        let claims = decode_token(cookie.value(), PURPOSE_SESSION, &config)
            .map_err(|_| WelcomeError::Unauthorized)?;
        Uuid::parse_str(&claims.sub).map_err(|_| WelcomeError::Unauthorized)?
    };

    let message = match state.user_store.read().await.get_user_by_id(user_id).await {
        Ok(user) => format!("Welcome back, {}!", user.first_name.as_ref()),
        Err(_) => "Welcome back!".to_string(),
    };

    Ok((StatusCode::OK, Json(LoginResponse { message })))
}
