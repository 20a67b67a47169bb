use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{email::Email, password::Password, person_name::PersonName};

/// A pending one-time code. The hash and expiry always travel together so the
/// record can never hold one without the other.
#[derive(PartialEq, Debug, Clone)]
pub struct PendingTwoFaCode {
    pub code_hash: String,
    pub expires_at: DateTime<Utc>,
}

/// A stored user record. Only the password hash is kept, never the plaintext.
#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub password_hash: String,
    pub is_active: bool,
    pub two_fa: Option<PendingTwoFaCode>,
}

/// Registration input, validated field by field before it reaches the store.
#[derive(PartialEq, Debug)]
pub struct NewUser {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub password: Password,
}

impl NewUser {
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        email: Email,
        password: Password,
    ) -> Self {
        NewUser {
            first_name,
            last_name,
            email,
            password,
        }
    }
}
