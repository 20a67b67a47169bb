use std::env;

use base64::engine::general_purpose::{STANDARD as B64_STD, URL_SAFE_NO_PAD as B64_URL};
use base64::Engine;
use dotenvy::dotenv;
use thiserror::Error;

use super::consts;

#[derive(Clone)]
pub struct Config {
    activation_secret: Vec<u8>,
    jwt_secret: String,
    base_url: String,
    activation_ttl_minutes: i64,
    two_fa_ttl_minutes: i64,
    session_ttl_seconds: i64,
}

impl Config {
    /// Key for signing activation links.
    pub fn activation_secret(&self) -> &[u8] {
        &self.activation_secret
    }
    /// Key for session and pending-2FA JWTs.
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    /// Public origin used when building activation links, no trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
    pub fn activation_ttl_minutes(&self) -> i64 {
        self.activation_ttl_minutes
    }
    pub fn two_fa_ttl_minutes(&self) -> i64 {
        self.two_fa_ttl_minutes
    }
    pub fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }

    pub fn new(
        activation_secret: Vec<u8>,
        jwt_secret: String,
        base_url: String,
    ) -> Result<Self, ConfigError> {
        if activation_secret.len() < 32 {
            return Err(ConfigError::WrongLen(
                "activation secret must be at least 32 bytes",
            ));
        }
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT secret must not be empty"));
        }

        Ok(Self {
            activation_secret,
            jwt_secret,
            base_url: base_url.trim_end_matches('/').to_string(),
            activation_ttl_minutes: consts::DEFAULT_ACTIVATION_TTL_MINUTES,
            two_fa_ttl_minutes: consts::DEFAULT_TWO_FA_TTL_MINUTES,
            session_ttl_seconds: consts::DEFAULT_SESSION_TTL_SECONDS,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let activation_secret_b64 = req_var(consts::env::ACTIVATION_SECRET_ENV_VAR)?;
        let activation_secret = decode_b64_any(&activation_secret_b64)
            .map_err(|_| ConfigError::Decode(consts::env::ACTIVATION_SECRET_ENV_VAR))?;

        let jwt_secret = req_var(consts::env::JWT_SECRET_ENV_VAR)?;

        let base_url = opt_var(consts::env::BASE_URL_ENV_VAR)
            .unwrap_or_else(|| "http://localhost:3000".into());

        let mut config = Self::new(activation_secret, jwt_secret, base_url)?;
        if let Some(minutes) = parse_opt_i64(consts::env::ACTIVATION_TTL_MINUTES_ENV_VAR)? {
            config.activation_ttl_minutes = minutes;
        }
        if let Some(minutes) = parse_opt_i64(consts::env::TWO_FA_TTL_MINUTES_ENV_VAR)? {
            config.two_fa_ttl_minutes = minutes;
        }
        if let Some(seconds) = parse_opt_i64(consts::env::SESSION_TTL_SECONDS_ENV_VAR)? {
            config.session_ttl_seconds = seconds;
        }

        Ok(config)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("decode error in {0}")]
    Decode(&'static str),
    #[error("{0}")]
    WrongLen(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_opt_i64(key: &'static str) -> Result<Option<i64>, ConfigError> {
    match opt_var(key) {
        None => Ok(None),
        Some(v) => v
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(key)),
    }
}

fn decode_b64_any(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    // Try URL-safe (no padding) first, then standard.
    B64_URL.decode(s).or_else(|_| B64_STD.decode(s))
}
