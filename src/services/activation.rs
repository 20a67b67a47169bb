use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::{EmailClient, EmailClientError, EmailMessage, User, UserStore, UserStoreError};
use crate::services::UrlSigner;
use crate::utils::Config;

/// Internal outcome of signed-link verification. Clients only ever see a
/// uniform "invalid or expired" message.
#[derive(Debug, PartialEq)]
pub enum ActivationTokenError {
    InvalidSignature,
    Expired,
}

#[derive(Debug)]
pub enum ReissueOutcome {
    AlreadyActive,
    LinkSent,
}

#[derive(Debug)]
pub enum ReissueError {
    UserNotFound,
    EmailDispatch(EmailClientError),
    UnexpectedError,
}

pub struct ActivationService {}

impl ActivationService {
    /// Produce a signed activation URL for `user_id`, valid for the
    /// configured window (30 minutes by default).
    pub async fn issue_link(state: &AppState, user_id: Uuid) -> String {
        let config = state.config.read().await;
        let expires =
            (Utc::now() + Duration::minutes(config.activation_ttl_minutes())).timestamp();
        Self::link_for(&config, user_id, expires)
    }

    /// Build the canonical URL and append its signature. Split out so tests
    /// can pin the expiry instant.
    pub(crate) fn link_for(config: &Config, user_id: Uuid, expires: i64) -> String {
        let canonical = canonical_url(config, user_id, expires);
        let signature = UrlSigner::new(config.activation_secret()).sign(&canonical);
        format!("{canonical}&signature={signature}")
    }

    /// Recompute the signature over the canonical URL, then check the expiry.
    /// Signature first: a tampered link must never read as merely expired.
    pub async fn verify_link(
        state: &AppState,
        user_id: Uuid,
        expires: i64,
        signature: &str,
    ) -> Result<(), ActivationTokenError> {
        let config = state.config.read().await;
        let canonical = canonical_url(&config, user_id, expires);
        if !UrlSigner::new(config.activation_secret()).verify(&canonical, signature) {
            return Err(ActivationTokenError::InvalidSignature);
        }
        if Utc::now().timestamp() > expires {
            return Err(ActivationTokenError::Expired);
        }
        Ok(())
    }

    /// Idempotently flips `is_active`.
    pub async fn activate(state: &AppState, user_id: Uuid) -> Result<(), UserStoreError> {
        state.user_store.write().await.mark_active(user_id).await
    }

    /// Regenerate and re-send a fresh link. No-op when the account is already
    /// active, so stale resend requests stay harmless.
    pub async fn reissue(state: &AppState, user_id: Uuid) -> Result<ReissueOutcome, ReissueError> {
        let user = state
            .user_store
            .read()
            .await
            .get_user_by_id(user_id)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => ReissueError::UserNotFound,
                _ => ReissueError::UnexpectedError,
            })?;

        if user.is_active {
            return Ok(ReissueOutcome::AlreadyActive);
        }

        let link = Self::issue_link(state, user.id).await;
        send_activation_email(state, &user, &link)
            .await
            .map_err(ReissueError::EmailDispatch)?;

        log::info!("re-issued activation link for user {}", user.id);
        Ok(ReissueOutcome::LinkSent)
    }
}

fn canonical_url(config: &Config, user_id: Uuid, expires: i64) -> String {
    format!(
        "{}/auth/activate/{}?expires={}",
        config.base_url(),
        user_id,
        expires
    )
}

pub async fn send_activation_email(
    state: &AppState,
    user: &User,
    link: &str,
) -> Result<(), EmailClientError> {
    let ttl_minutes = state.config.read().await.activation_ttl_minutes();
    let message = EmailMessage {
        recipient: user.email.clone(),
        subject: "Activate your account".to_string(),
        body: format!(
            "Welcome, {}! Activate your account by visiting the link below.\n{}\nThe link is valid for {} minutes.",
            user.first_name.as_ref(),
            link,
            ttl_minutes
        ),
    };
    state.email_client.write().await.send(message).await
}
