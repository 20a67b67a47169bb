use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct LoginResponse {
    pub message: String,
}

/// Returned with `206 Partial Content` when the password checked out and the
/// login now waits on the emailed one-time code.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct TwoFactorChallengeResponse {
    pub message: String,
}
