use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    Email, NewUser, Password, PendingTwoFaCode, User, UserStore, UserStoreError,
};
use crate::services::hashing;

/// In-memory user store keyed by user id. A single web property holds few
/// enough users that email lookup can scan.
pub struct HashmapUserStore {
    users: HashMap<Uuid, User>,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        HashmapUserStore {
            users: HashMap::new(),
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    fn find_by_email(&self, email: &Email) -> Option<&User> {
        self.users.values().find(|user| &user.email == email)
    }
}

impl Default for HashmapUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, new_user: NewUser) -> Result<User, UserStoreError> {
        if self.find_by_email(&new_user.email).is_some() {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let password_hash = hashing::hash_secret(new_user.password.as_ref())
            .await
            .map_err(|_| UserStoreError::UnexpectedError)?;

        let user = User {
            id: Uuid::new_v4(),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            password_hash,
            is_active: false,
            two_fa: None,
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.find_by_email(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<User, UserStoreError> {
        self.users.get(&id).cloned().ok_or(UserStoreError::UserNotFound)
    }

    async fn validate_credentials(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<User, UserStoreError> {
        let user = self
            .find_by_email(email)
            .ok_or(UserStoreError::UserNotFound)?;

        let matches = hashing::verify_secret(password, &user.password_hash)
            .await
            .map_err(|_| UserStoreError::UnexpectedError)?;
        if matches {
            Ok(user.clone())
        } else {
            Err(UserStoreError::InvalidCredentials)
        }
    }

    async fn mark_active(&mut self, id: Uuid) -> Result<(), UserStoreError> {
        let user = self.users.get_mut(&id).ok_or(UserStoreError::UserNotFound)?;
        user.is_active = true;
        Ok(())
    }

    async fn set_two_fa_code(
        &mut self,
        id: Uuid,
        code_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserStoreError> {
        let user = self.users.get_mut(&id).ok_or(UserStoreError::UserNotFound)?;
        user.two_fa = Some(PendingTwoFaCode {
            code_hash,
            expires_at,
        });
        Ok(())
    }

    async fn clear_two_fa_code(&mut self, id: Uuid) -> Result<(), UserStoreError> {
        let user = self.users.get_mut(&id).ok_or(UserStoreError::UserNotFound)?;
        user.two_fa = None;
        Ok(())
    }
}
