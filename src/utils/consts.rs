pub const SESSION_COOKIE_NAME: &str = "session";
pub const PENDING_2FA_COOKIE_NAME: &str = "pending_2fa";

// Default lifetimes; overridable through the environment, see utils::config.
pub const DEFAULT_ACTIVATION_TTL_MINUTES: i64 = 30;
pub const DEFAULT_TWO_FA_TTL_MINUTES: i64 = 5;
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 3600;

pub mod env {
    pub const ACTIVATION_SECRET_ENV_VAR: &str = "ACTIVATION_SECRET_B64";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const BASE_URL_ENV_VAR: &str = "BASE_URL";
    pub const ACTIVATION_TTL_MINUTES_ENV_VAR: &str = "ACTIVATION_TTL_MINUTES";
    pub const TWO_FA_TTL_MINUTES_ENV_VAR: &str = "TWO_FA_TTL_MINUTES";
    pub const SESSION_TTL_SECONDS_ENV_VAR: &str = "SESSION_TTL_SECONDS";
}
