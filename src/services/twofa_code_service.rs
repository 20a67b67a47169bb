use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::{TwoFACode, UserStore, UserStoreError};
use crate::services::hashing;

#[derive(Debug, PartialEq)]
pub enum TwoFaError {
    IncorrectCode,
    ExpiredCode,
    UserNotFound,
    UnexpectedError,
}

pub struct TwoFaCodeService {}

impl TwoFaCodeService {
    /// Draw a fresh 6-digit code, store its hash and expiry on the user
    /// record, and hand back the plaintext for email delivery. Any prior
    /// pending code is overwritten (last write wins).
    pub async fn generate(state: &AppState, user_id: Uuid) -> Result<TwoFACode, TwoFaError> {
        let code = TwoFACode::default();
        let code_hash = hashing::hash_secret(code.as_ref())
            .await
            .map_err(|_| TwoFaError::UnexpectedError)?;

        let ttl_minutes = state.config.read().await.two_fa_ttl_minutes();
        let expires_at = Utc::now() + Duration::minutes(ttl_minutes);

        state
            .user_store
            .write()
            .await
            .set_two_fa_code(user_id, code_hash, expires_at)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => TwoFaError::UserNotFound,
                _ => TwoFaError::UnexpectedError,
            })?;

        log::info!("generated 2FA code for user {user_id}");
        Ok(code)
    }

    /// Check a submitted code. The hash comparison runs before the expiry
    /// check, so a correct-but-stale code reads as expired rather than
    /// incorrect. On success the pending code is cleared; a replay of the
    /// same code then fails.
    pub async fn verify(
        state: &AppState,
        user_id: Uuid,
        submitted: &TwoFACode,
    ) -> Result<(), TwoFaError> {
        let user = state
            .user_store
            .read()
            .await
            .get_user_by_id(user_id)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => TwoFaError::UserNotFound,
                _ => TwoFaError::UnexpectedError,
            })?;

        let Some(pending) = user.two_fa else {
            // Nothing pending: already consumed or never issued.
            return Err(TwoFaError::IncorrectCode);
        };

        let matches = hashing::verify_secret(submitted.as_ref(), &pending.code_hash)
            .await
            .map_err(|_| TwoFaError::UnexpectedError)?;
        if !matches {
            log::warn!("incorrect 2FA code for user {user_id}");
            return Err(TwoFaError::IncorrectCode);
        }

        if Utc::now() > pending.expires_at {
            log::warn!("expired 2FA code for user {user_id}");
            return Err(TwoFaError::ExpiredCode);
        }

        state
            .user_store
            .write()
            .await
            .clear_two_fa_code(user_id)
            .await
            .map_err(|_| TwoFaError::UnexpectedError)?;

        log::info!("2FA code verified for user {user_id}");
        Ok(())
    }
}
