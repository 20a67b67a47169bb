use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::UserStoreError;
use crate::domain::{Email, NewUser, User};

// This trait represents the interface all concrete user stores should implement
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Creates an inactive user from validated registration input. The store
    /// owns password hashing so plaintext never leaves this call.
    async fn add_user(&mut self, new_user: NewUser) -> Result<User, UserStoreError>;

    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError>;

    async fn get_user_by_id(&self, id: Uuid) -> Result<User, UserStoreError>;

    /// Checks the password against the stored hash and returns the user on
    /// success. Absent user and wrong password are distinct here; callers
    /// collapse them before anything reaches the client.
    async fn validate_credentials(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<User, UserStoreError>;

    /// Sets `is_active`. Safe to call on an already-active user.
    async fn mark_active(&mut self, id: Uuid) -> Result<(), UserStoreError>;

    /// Stores a pending one-time code hash and its expiry, overwriting any
    /// previous pending code (last write wins).
    async fn set_two_fa_code(
        &mut self,
        id: Uuid,
        code_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserStoreError>;

    async fn clear_two_fa_code(&mut self, id: Uuid) -> Result<(), UserStoreError>;
}
