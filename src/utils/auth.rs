use axum_extra::extract::cookie::Cookie;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cookie_helpers::{pending_2fa_cookie, session_cookie};
use super::{Config, PENDING_2FA_COOKIE_NAME, SESSION_COOKIE_NAME};

/// Claims shared by the session token and the pending-2FA token. The
/// `purpose` field keeps one from being replayed as the other.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub purpose: String,
    pub exp: usize,
}

pub const PURPOSE_SESSION: &str = "session";
pub const PURPOSE_PENDING_2FA: &str = "pending_2fa";

#[derive(Debug)]
pub enum TokenError {
    TokenError(jsonwebtoken::errors::Error),
    WrongPurpose,
    UnexpectedError,
}

// Create cookie holding a fresh session JWT, set after the second factor passes
pub fn generate_session_cookie(
    user_id: Uuid,
    config: &Config,
) -> Result<Cookie<'static>, TokenError> {
    let token = generate_token(
        user_id,
        PURPOSE_SESSION,
        config.session_ttl_seconds(),
        config,
    )?;
    Ok(session_cookie(
        SESSION_COOKIE_NAME,
        &token,
        config.session_ttl_seconds(),
    ))
}

// Create the short-lived cookie carrying the signed pending-login marker.
// It replaces ambient session state: the marker is a capability that expires
// with the one-time code it guards.
pub fn generate_pending_2fa_cookie(
    user_id: Uuid,
    config: &Config,
) -> Result<Cookie<'static>, TokenError> {
    let ttl_seconds = config.two_fa_ttl_minutes() * 60;
    let token = generate_token(user_id, PURPOSE_PENDING_2FA, ttl_seconds, config)?;
    Ok(pending_2fa_cookie(
        PENDING_2FA_COOKIE_NAME,
        &token,
        ttl_seconds,
    ))
}

fn generate_token(
    user_id: Uuid,
    purpose: &str,
    ttl_seconds: i64,
    config: &Config,
) -> Result<String, TokenError> {
    let delta =
        chrono::Duration::try_seconds(ttl_seconds).ok_or(TokenError::UnexpectedError)?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenError::UnexpectedError)?
        .timestamp();

    // Cast exp to a usize, which is what Claims expects
    let exp: usize = exp.try_into().map_err(|_| TokenError::UnexpectedError)?;

    let claims = Claims {
        sub: user_id.to_string(),
        purpose: purpose.to_owned(),
        exp,
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret().as_bytes()),
    )
    .map_err(TokenError::TokenError)
}

/// Decode a token and check it was minted for the expected purpose. Signature
/// and expiry failures both surface as `TokenError::TokenError`.
pub fn decode_token(
    token: &str,
    expected_purpose: &str,
    config: &Config,
) -> Result<Claims, TokenError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret().as_bytes()),
        &Validation::default(),
    )
    .map_err(TokenError::TokenError)?;

    if data.claims.purpose != expected_purpose {
        return Err(TokenError::WrongPurpose);
    }

    Ok(data.claims)
}
