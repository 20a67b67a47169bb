//! Argon2id hashing for passwords and one-time codes. The work runs on the
//! blocking pool so request tasks are not stalled by the KDF.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};

#[derive(Debug, thiserror::Error)]
pub enum HashingError {
    #[error("hashing failed")]
    Hash,
    #[error("hashing task failed")]
    Task,
}

pub async fn hash_secret(secret: &str) -> Result<String, HashingError> {
    let secret = secret.to_owned();
    tokio::task::spawn_blocking(move || {
        let argon2 = Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(15000, 2, 1, None).map_err(|_| HashingError::Hash)?,
        );
        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|_| HashingError::Hash)?
            .to_string();
        Ok(hash)
    })
    .await
    .map_err(|_| HashingError::Task)?
}

pub async fn verify_secret(secret: &str, hash: &str) -> Result<bool, HashingError> {
    let secret = secret.to_owned();
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || {
        let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashingError::Hash)?;
        let argon2 = Argon2::default();
        match argon2.verify_password(secret.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    })
    .await
    .map_err(|_| HashingError::Task)?
}
