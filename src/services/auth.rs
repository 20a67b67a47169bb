use crate::app_state::AppState;
use crate::domain::{Email, EmailClient, EmailMessage, NewUser, User, UserStore, UserStoreError};
use crate::errors::{LoginError, RegisterError};
use crate::services::activation::{send_activation_email, ActivationService};
use crate::services::twofa_code_service::TwoFaCodeService;

pub struct AuthService {}

impl AuthService {
    /// Create an inactive user, then email the signed activation link.
    /// If the email cannot be sent the user record is intentionally kept:
    /// the caller can request a fresh link via resend-activation.
    pub async fn register(state: &AppState, new_user: NewUser) -> Result<User, RegisterError> {
        let user = state
            .user_store
            .write()
            .await
            .add_user(new_user)
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => RegisterError::EmailTaken,
                _ => RegisterError::InternalServerError,
            })?;

        let link = ActivationService::issue_link(state, user.id).await;
        if let Err(e) = send_activation_email(state, &user, &link).await {
            log::error!("activation email for user {} failed: {e}", user.id);
            return Err(RegisterError::EmailDispatchFailed);
        }

        log::info!("registered user {}", user.id);
        Ok(user)
    }

    /// First login step: password check, activation gate, then issue and
    /// email the one-time code. The caller still has to set the pending
    /// marker and collect the second factor.
    pub async fn login(state: &AppState, email: Email, password: &str) -> Result<User, LoginError> {
        let user = match state
            .user_store
            .read()
            .await
            .validate_credentials(&email, password)
            .await
        {
            // Unknown email and wrong password look identical to the client.
            Err(UserStoreError::UserNotFound) | Err(UserStoreError::InvalidCredentials) => {
                Err(LoginError::InvalidCredentials)
            }
            Err(_) => Err(LoginError::InternalServerError),
            Ok(user) => Ok(user),
        }?;

        if !user.is_active {
            return Err(LoginError::AccountInactive);
        }

        let code = TwoFaCodeService::generate(state, user.id)
            .await
            .map_err(|_| LoginError::InternalServerError)?;

        let ttl_minutes = state.config.read().await.two_fa_ttl_minutes();
        let message = EmailMessage {
            recipient: user.email.clone(),
            subject: "Your verification code".to_string(),
            body: format!(
                "Your verification code is {}\nIt expires in {} minutes.",
                code.as_ref(),
                ttl_minutes
            ),
        };
        state
            .email_client
            .write()
            .await
            .send(message)
            .await
            .map_err(|e| {
                log::error!("2FA code email for user {} failed: {e}", user.id);
                LoginError::InternalServerError
            })?;

        Ok(user)
    }
}
