use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

/// Activation status page payload (`GET /auth/access/activation/{user}`).
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct ActivationStatusResponse {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}
