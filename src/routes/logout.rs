use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::domain::LogoutResponse;
use crate::utils::{clear_cookie, PENDING_2FA_COOKIE_NAME, SESSION_COOKIE_NAME};

/// End the session. Clearing cookies for an already-anonymous caller is
/// harmless, so this never fails.
pub async fn logout(jar: CookieJar) -> (CookieJar, impl IntoResponse) {
    let jar = jar
        .add(clear_cookie(SESSION_COOKIE_NAME, "/"))
        .add(clear_cookie(PENDING_2FA_COOKIE_NAME, "/auth"));

    (
        jar,
        (
            StatusCode::OK,
            Json(LogoutResponse {
                message: "Logged out successfully".to_string(),
            }),
        ),
    )
}
